//! Conversion of decimal currency amounts into integer smallest units.
//!
//! Every amount entering the engine passes through here exactly once:
//! 1. Text is parsed as an exact decimal (never binary floating point)
//! 2. Negative amounts are clamped to zero
//! 3. `amount / rounding_unit` is rounded to an integer, ties half up
//!
//! Unparseable or unrepresentable amounts degrade to zero so that one bad row
//! does not abort the batch.

use crate::model::Units;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Smallest indivisible monetary increment used when splitting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingUnit {
    /// 1, whole currency units.
    Whole,
    /// 0.01, cents/paise.
    #[default]
    Hundredth,
    /// 0.05, five cents/paise.
    Twentieth,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported rounding unit '{0}' (expected 1, 0.01 or 0.05)")]
pub struct UnsupportedRoundingUnit(pub String);

impl RoundingUnit {
    pub const ALL: [RoundingUnit; 3] = [
        RoundingUnit::Hundredth,
        RoundingUnit::Whole,
        RoundingUnit::Twentieth,
    ];

    pub fn as_decimal(self) -> Decimal {
        match self {
            RoundingUnit::Whole => Decimal::ONE,
            RoundingUnit::Hundredth => Decimal::new(1, 2),
            RoundingUnit::Twentieth => Decimal::new(5, 2),
        }
    }

    /// `1 / unit` rounded half up.
    pub fn scale_factor(self) -> i64 {
        match self {
            RoundingUnit::Whole => 1,
            RoundingUnit::Hundredth => 100,
            RoundingUnit::Twentieth => 20,
        }
    }
}

impl fmt::Display for RoundingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_decimal())
    }
}

impl FromStr for RoundingUnit {
    type Err = UnsupportedRoundingUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "whole" => return Ok(RoundingUnit::Whole),
            "hundredth" | "cent" | "cents" => return Ok(RoundingUnit::Hundredth),
            "twentieth" => return Ok(RoundingUnit::Twentieth),
            _ => {}
        }

        let value = Decimal::from_str(trimmed)
            .map_err(|_| UnsupportedRoundingUnit(trimmed.to_string()))?;
        RoundingUnit::ALL
            .into_iter()
            .find(|unit| unit.as_decimal() == value)
            .ok_or_else(|| UnsupportedRoundingUnit(trimmed.to_string()))
    }
}

/// Parses an amount as an exact decimal. Plain and scientific notation are accepted.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// An amount as supplied by the caller, before normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawAmount<'a> {
    Missing,
    Text(&'a str),
    Decimal(Decimal),
    Float(f64),
    Integer(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountRejection {
    #[error("amount is not a number")]
    Unparseable,
    #[error("amount does not fit in smallest units")]
    OutOfRange,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AmountNormalizer {
    rounding_unit: RoundingUnit,
}

impl AmountNormalizer {
    pub fn new(rounding_unit: RoundingUnit) -> Self {
        Self { rounding_unit }
    }

    /// Converts an exact amount to smallest units, or `None` if it does not fit.
    pub fn try_to_units(self, amount: Decimal) -> Option<Units> {
        if amount < Decimal::ZERO {
            return Some(Units::ZERO);
        }
        let scaled = amount.checked_mul(Decimal::from(self.rounding_unit.scale_factor()))?;
        scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Units::from_i64)
    }

    /// Missing amounts count as zero. Floats go through their shortest decimal
    /// representation, never through binary arithmetic.
    pub fn normalize(self, raw: RawAmount<'_>) -> Result<Units, AmountRejection> {
        let amount = match raw {
            RawAmount::Missing => return Ok(Units::ZERO),
            RawAmount::Text(text) => parse_amount(text).ok_or(AmountRejection::Unparseable)?,
            RawAmount::Decimal(amount) => amount,
            RawAmount::Float(value) => {
                parse_amount(&value.to_string()).ok_or(AmountRejection::Unparseable)?
            }
            RawAmount::Integer(value) => Decimal::from(value),
        };
        self.try_to_units(amount).ok_or(AmountRejection::OutOfRange)
    }

    pub fn normalize_or_zero(self, raw: RawAmount<'_>) -> Units {
        self.normalize(raw)
            .unwrap_or_else(|rejection| self.reject(raw, rejection))
    }

    /// Logs why `raw` was rejected and returns the zero it is replaced with.
    pub fn reject(self, raw: RawAmount<'_>, rejection: AmountRejection) -> Units {
        tracing::warn!(
            reject_reason = %rejection,
            raw = ?raw,
            rounding_unit = %self.rounding_unit,
            "Amount rejected; treating as zero"
        );
        Units::ZERO
    }

    /// Scales smallest units back to a decimal amount of the major currency unit.
    pub fn to_decimal(self, units: Units) -> Decimal {
        Decimal::from(units.amount()) / Decimal::from(self.rounding_unit.scale_factor())
    }
}
