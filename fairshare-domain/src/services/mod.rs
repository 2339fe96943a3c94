pub mod amount_normalizer;
pub mod settlement_calculator;
pub mod share_allocator;

pub use amount_normalizer::{
    AmountNormalizer, AmountRejection, RawAmount, RoundingUnit, UnsupportedRoundingUnit,
    parse_amount,
};
pub use settlement_calculator::SettlementCalculator;
pub use share_allocator::{RemainderPolicy, ShareAllocator};
