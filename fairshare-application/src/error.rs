use fairshare_domain::{LedgerError, SettlementError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error(transparent)]
    Roster(#[from] RosterParseError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuickSplitError {
    #[error("Headcount must be at least 1")]
    NoPeople,
    #[error("Headcount must be at most {max}")]
    TooManyPeople { max: usize },
}
