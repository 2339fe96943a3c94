use fairshare_domain::{AmountNormalizer, RoundingUnit, Units};
use rust_decimal::{Decimal, RoundingStrategy};
use std::borrow::Cow;

pub const DEFAULT_CURRENCY: &str = "₹";

/// Renders smallest units as `<currency><grouped integer>.<2 decimals>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoneyFormatter<'a> {
    currency: Cow<'a, str>,
    normalizer: AmountNormalizer,
}

impl<'a> MoneyFormatter<'a> {
    pub fn new(currency: impl Into<Cow<'a, str>>, rounding_unit: RoundingUnit) -> Self {
        Self {
            currency: currency.into(),
            normalizer: AmountNormalizer::new(rounding_unit),
        }
    }

    pub fn format(&self, units: Units) -> String {
        let amount = self.normalizer.to_decimal(units);
        let sign = if amount < Decimal::ZERO { "-" } else { "" };
        format!("{sign}{}{}", self.currency, group_thousands(amount.abs()))
    }

    /// Like [`format`](Self::format) but with an explicit `+` on non-negative amounts.
    pub fn format_signed(&self, units: Units) -> String {
        if units.signum() >= 0 {
            format!("+{}", self.format(units))
        } else {
            self.format(units)
        }
    }
}

fn group_thousands(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits = integer.as_bytes();
    let mut grouped = String::with_capacity(text.len() + digits.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}
