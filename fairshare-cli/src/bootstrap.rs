use fairshare_domain::{RemainderPolicy, RoundingUnit};
use fairshare_presentation::DEFAULT_CURRENCY;
use std::env;
use tracing_subscriber::EnvFilter;

pub const CURRENCY_VAR: &str = "FAIRSHARE_CURRENCY";
pub const ROUNDING_UNIT_VAR: &str = "FAIRSHARE_ROUNDING_UNIT";
pub const REMAINDER_OFFSET_VAR: &str = "FAIRSHARE_REMAINDER_OFFSET";

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub currency: String,
    pub rounding_unit: RoundingUnit,
    pub remainder_policy: RemainderPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            rounding_unit: RoundingUnit::default(),
            remainder_policy: RemainderPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Invalid values fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let currency = lookup(CURRENCY_VAR)
            .filter(|currency| !currency.trim().is_empty())
            .unwrap_or(defaults.currency);

        let rounding_unit = match lookup(ROUNDING_UNIT_VAR) {
            Some(raw) => raw.parse::<RoundingUnit>().unwrap_or_else(|err| {
                tracing::warn!(
                    var = ROUNDING_UNIT_VAR,
                    value = %raw,
                    reject_reason = %err,
                    fallback = %defaults.rounding_unit,
                    "Invalid rounding unit; using default"
                );
                defaults.rounding_unit
            }),
            None => defaults.rounding_unit,
        };

        let remainder_policy = match lookup(REMAINDER_OFFSET_VAR) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(offset) => RemainderPolicy::RotateFrom(offset),
                Err(err) => {
                    tracing::warn!(
                        var = REMAINDER_OFFSET_VAR,
                        value = %raw,
                        reject_reason = %err,
                        "Invalid remainder offset; using input order"
                    );
                    defaults.remainder_policy
                }
            },
            None => defaults.remainder_policy,
        };

        Self {
            currency,
            rounding_unit,
            remainder_policy,
        }
    }
}

/// Initialize logging and tracing
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
