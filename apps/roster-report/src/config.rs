use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use chrono::Month;
use rust_decimal::Decimal;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub remove_name: String,
    pub raise_percentage: Decimal,
    pub birth_months: Vec<Month>,
    pub minimum_wage: Decimal,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let remove_name = lookup("ROSTER_REMOVE_NAME").unwrap_or_else(|| "João".into());

        let raise_percentage = decimal_var(&lookup, "ROSTER_RAISE_PERCENTAGE", "0.1")?;

        let months_raw = lookup("ROSTER_BIRTH_MONTHS").unwrap_or_else(|| "10,12".into());
        let birth_months = months_raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_month)
            .collect::<Result<Vec<_>>>()
            .context("invalid ROSTER_BIRTH_MONTHS")?;
        if birth_months.is_empty() {
            return Err(anyhow!("ROSTER_BIRTH_MONTHS must list at least one month"));
        }

        let minimum_wage = decimal_var(&lookup, "ROSTER_MINIMUM_WAGE", "1212.00")?;
        if minimum_wage <= Decimal::ZERO {
            return Err(anyhow!("ROSTER_MINIMUM_WAGE must be greater than zero"));
        }

        Ok(Self {
            remove_name,
            raise_percentage,
            birth_months,
            minimum_wage,
        })
    }
}

fn decimal_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<Decimal> {
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    Decimal::from_str(raw.trim()).with_context(|| format!("invalid {}", key))
}

/// Accepts `1`..`12` or an English month name such as `October` or `oct`.
fn parse_month(raw: &str) -> Result<Month> {
    if let Ok(number) = raw.parse::<u8>() {
        return Month::try_from(number).map_err(|_| anyhow!("month {} out of range", number));
    }
    raw.parse::<Month>().map_err(|_| anyhow!("unknown month {:?}", raw))
}
