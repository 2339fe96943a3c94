#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::{LedgerError, SettlementError};
pub use model::{
    Ledger, LedgerEntry, Participant, ParticipantId, Settlement, Transfer, Units, placeholder_name,
};
pub use services::{
    AmountNormalizer, AmountRejection, RawAmount, RemainderPolicy, RoundingUnit,
    SettlementCalculator, ShareAllocator, UnsupportedRoundingUnit,
};
