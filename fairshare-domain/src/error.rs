use crate::model::ParticipantId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Total amount paid does not fit in {participant_count} participants' smallest units")]
    TotalOverflow { participant_count: usize },
}

/// Internal-consistency faults of the settlement stage.
///
/// None of these can be caused by user input: they mean the balances handed to
/// the calculator were not produced by a correct allocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error("Sum of net balances must be zero (found {0})")]
    ImbalancedTotal(i128),
    #[error(
        "Settlement ended with unmatched balances (debtors left={debtors_left}, creditors left={creditors_left})"
    )]
    UnmatchedBalance {
        debtors_left: usize,
        creditors_left: usize,
    },
    #[error("Transfer references unknown participant {0:?}")]
    UnknownParticipant(ParticipantId),
    #[error("Balance of participant {0:?} overflows after transfers")]
    BalanceOverflow(ParticipantId),
    #[error("Transfer amount {0} does not fit in smallest units")]
    TransferOutOfRange(u64),
}
