use std::{
    borrow::Cow,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use crate::{
    error::{LedgerError, SettlementError},
    services::{RemainderPolicy, RoundingUnit, SettlementCalculator, ShareAllocator},
};

/// Integer count of the smallest monetary increment (e.g. cents).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Units(i64);

impl Units {
    pub const ZERO: Self = Self(0);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub const fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Units {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Units {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Units {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Units {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Units {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Units {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Units> for Units {
    fn sum<I: Iterator<Item = &'a Units>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Position of a participant in the input list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub usize);

/// Label used for a participant whose name is blank or missing.
pub fn placeholder_name(id: ParticipantId) -> String {
    format!("Person {}", id.0 + 1)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant<'a> {
    name: Cow<'a, str>,
    paid: Units,
}

impl<'a> Participant<'a> {
    /// Negative payments are clamped to zero.
    pub fn new(name: impl Into<Cow<'a, str>>, paid: Units) -> Self {
        Self {
            name: name.into(),
            paid: paid.max(Units::ZERO),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn paid(&self) -> Units {
        self.paid
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerEntry<'a> {
    pub id: ParticipantId,
    pub name: Cow<'a, str>,
    pub paid: Units,
    pub share: Units,
    /// Positive: to be reimbursed. Negative: owes money.
    pub net: Units,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger<'a> {
    rounding_unit: RoundingUnit,
    total: Units,
    entries: Vec<LedgerEntry<'a>>,
}

impl<'a> Ledger<'a> {
    pub fn build(
        participants: Vec<Participant<'a>>,
        rounding_unit: RoundingUnit,
        policy: RemainderPolicy,
    ) -> Result<Self, LedgerError> {
        let participant_count = participants.len();
        let total = participants
            .iter()
            .try_fold(Units::ZERO, |acc, participant| {
                acc.checked_add(participant.paid)
            })
            .ok_or(LedgerError::TotalOverflow { participant_count })?;

        tracing::debug!(
            participant_count,
            total = %total,
            rounding_unit = %rounding_unit,
            remainder_policy = ?policy,
            "Ledger build started"
        );

        let shares = ShareAllocator::allocate(total, participant_count, policy);
        let entries: Vec<LedgerEntry<'a>> = participants
            .into_iter()
            .zip(shares)
            .enumerate()
            .map(|(idx, (participant, share))| LedgerEntry {
                id: ParticipantId(idx),
                name: participant.name,
                paid: participant.paid,
                share,
                net: participant.paid - share,
            })
            .collect();

        debug_assert_eq!(entries.iter().map(|e| e.share).sum::<Units>(), total);
        debug_assert!(entries.iter().map(|e| e.net).sum::<Units>().is_zero());

        Ok(Self {
            rounding_unit,
            total,
            entries,
        })
    }

    pub fn rounding_unit(&self) -> RoundingUnit {
        self.rounding_unit
    }

    pub fn scale_factor(&self) -> i64 {
        self.rounding_unit.scale_factor()
    }

    pub fn total(&self) -> Units {
        self.total
    }

    pub fn entries(&self) -> &[LedgerEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn name(&self, id: ParticipantId) -> Option<&str> {
        self.entries.get(id.0).map(|entry| entry.name.as_ref())
    }

    pub fn nets(&self) -> impl Iterator<Item = (ParticipantId, Units)> + '_ {
        self.entries.iter().map(|entry| (entry.id, entry.net))
    }

    /// Net balances left after applying `transfers`: debtors pay, creditors receive.
    pub fn balances_after(&self, transfers: &[Transfer]) -> Result<Vec<Units>, SettlementError> {
        let mut balances: Vec<Units> = self.entries.iter().map(|entry| entry.net).collect();
        for transfer in transfers {
            let from = balances
                .get_mut(transfer.from.0)
                .ok_or(SettlementError::UnknownParticipant(transfer.from))?;
            *from = from
                .checked_add(transfer.amount)
                .ok_or(SettlementError::BalanceOverflow(transfer.from))?;
            let to = balances
                .get_mut(transfer.to.0)
                .ok_or(SettlementError::UnknownParticipant(transfer.to))?;
            *to = to
                .checked_sub(transfer.amount)
                .ok_or(SettlementError::BalanceOverflow(transfer.to))?;
        }
        Ok(balances)
    }

    pub fn settle(self) -> Result<Settlement<'a>, SettlementError> {
        let transfers = SettlementCalculator.calculate(self.nets())?;

        debug_assert!(
            self.balances_after(&transfers)
                .is_ok_and(|balances| balances.iter().all(|b| b.is_zero()))
        );

        Ok(Settlement {
            ledger: self,
            transfers,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Units,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement<'a> {
    pub ledger: Ledger<'a>,
    pub transfers: Vec<Transfer>,
}

impl Settlement<'_> {
    /// Transfers with participant names resolved through the ledger.
    pub fn named_transfers(&self) -> impl Iterator<Item = (&str, &str, Units)> + '_ {
        self.transfers.iter().filter_map(|transfer| {
            Some((
                self.ledger.name(transfer.from)?,
                self.ledger.name(transfer.to)?,
                transfer.amount,
            ))
        })
    }
}
