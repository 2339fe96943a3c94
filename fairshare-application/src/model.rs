use fairshare_domain::{
    AmountRejection, Ledger, ParticipantId, RawAmount, RoundingUnit, Settlement, Transfer, Units,
};

/// A participant row as supplied by the caller, before normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticipantInput<'a> {
    pub name: Option<&'a str>,
    pub paid: RawAmount<'a>,
}

impl<'a> ParticipantInput<'a> {
    pub fn new(name: &'a str, paid: RawAmount<'a>) -> Self {
        Self {
            name: Some(name),
            paid,
        }
    }

    pub fn text(name: &'a str, paid: &'a str) -> Self {
        Self::new(name, RawAmount::Text(paid))
    }
}

/// A row whose amount could not be used and was replaced by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegradedRow {
    pub id: ParticipantId,
    pub reason: AmountRejection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitResult<'a> {
    pub settlement: Settlement<'a>,
    pub degraded_rows: Vec<DegradedRow>,
}

impl<'a> SplitResult<'a> {
    pub fn ledger(&self) -> &Ledger<'a> {
        &self.settlement.ledger
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.settlement.transfers
    }

    pub fn is_settled(&self) -> bool {
        self.settlement.transfers.is_empty()
    }
}

/// Even split of a single total among anonymous people.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickSplit {
    pub rounding_unit: RoundingUnit,
    pub total: Units,
    pub base_share: Units,
    /// Number of people paying one extra smallest unit.
    pub remainder: usize,
    pub shares: Vec<QuickShare>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickShare {
    pub label: String,
    pub share: Units,
}
