use crate::{
    error::SettlementError,
    model::{ParticipantId, Transfer, Units},
};
use smallvec::SmallVec;

type Partition = SmallVec<[(ParticipantId, u64); 16]>;

/// Settlement calculation service
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Calculate transfers that bring every net balance to zero
    ///
    /// Debtors and creditors are matched greedily with two cursors, each
    /// partition keeping the input order, so the output is deterministic.
    ///
    /// # Arguments
    /// * `balances` - Net balance per participant (positive: creditor, negative: debtor)
    ///
    /// # Returns
    /// At most `debtors + creditors - 1` transfers, or an internal-consistency
    /// error when the balances do not sum to zero
    pub fn calculate<I>(&self, balances: I) -> Result<Vec<Transfer>, SettlementError>
    where
        I: IntoIterator<Item = (ParticipantId, Units)>,
    {
        let mut debtors = Partition::new();
        let mut creditors = Partition::new();
        let mut total: i128 = 0;

        for (id, net) in balances {
            total += i128::from(net.amount());
            match net.signum() {
                -1 => debtors.push((id, net.amount().unsigned_abs())),
                1 => creditors.push((id, net.amount().unsigned_abs())),
                _ => {}
            }
        }

        if total != 0 {
            tracing::error!(
                reject_reason = "input_imbalance",
                debtor_count = debtors.len(),
                creditor_count = creditors.len(),
                total,
                "Settlement rejected due to non-zero net sum"
            );
            return Err(SettlementError::ImbalancedTotal(total));
        }

        tracing::debug!(
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            "Settlement started"
        );

        let mut transfers = Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
        let (mut i, mut j) = (0, 0);
        while i < debtors.len() && j < creditors.len() {
            let (debtor, debt) = debtors[i];
            let (creditor, credit) = creditors[j];
            let amount = debt.min(credit);
            if amount > 0 {
                let amount = i64::try_from(amount).map_err(|_| {
                    tracing::error!(
                        reject_reason = "transfer_out_of_range",
                        amount,
                        "Settlement transfer does not fit in smallest units"
                    );
                    SettlementError::TransferOutOfRange(amount)
                })?;
                transfers.push(Transfer {
                    from: debtor,
                    to: creditor,
                    amount: Units::from_i64(amount),
                });
            }

            debtors[i].1 -= amount;
            creditors[j].1 -= amount;
            if debtors[i].1 == 0 {
                i += 1;
            }
            if creditors[j].1 == 0 {
                j += 1;
            }
        }

        if i != debtors.len() || j != creditors.len() {
            let debtors_left = debtors.len() - i;
            let creditors_left = creditors.len() - j;
            tracing::error!(
                reject_reason = "unmatched_balance",
                debtors_left,
                creditors_left,
                transfer_count = transfers.len(),
                "Settlement cursors did not exhaust together"
            );
            return Err(SettlementError::UnmatchedBalance {
                debtors_left,
                creditors_left,
            });
        }

        debug_assert!(transfers.len() < debtors.len() + creditors.len() || transfers.is_empty());

        Ok(transfers)
    }
}
