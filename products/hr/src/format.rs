//! Display formatting for roster values, using the pt-BR number convention.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{Employee, HrError, HrResult};

/// Pattern used by [`format_date`]; parse with the same pattern to round-trip.
pub const DATE_PATTERN: &str = "%d/%m/%Y";

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: u32 = 3;
const RATIO_FRACTION_DIGITS: u32 = 6;

/// Grouped with `.`, `,` before the fraction, at most three fraction digits and
/// no trailing zeros: `2210.384` renders as `2.210,384`.
pub fn format_currency(value: impl Into<Option<Decimal>>) -> HrResult<String> {
    let value = value.into().ok_or_else(|| HrError::missing("value"))?;
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointNearestEven)
        .normalize();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    Ok(out)
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_date(date: impl Into<Option<NaiveDate>>) -> HrResult<String> {
    let date = date.into().ok_or_else(|| HrError::missing("date"))?;
    Ok(date.format(DATE_PATTERN).to_string())
}

/// Six fraction digits rounded half-up, no grouping: `1.824` renders as `1,824000`.
pub fn format_ratio(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(
        RATIO_FRACTION_DIGITS,
        RoundingStrategy::MidpointAwayFromZero,
    );
    format!("{rounded:.prec$}", prec = RATIO_FRACTION_DIGITS as usize).replace('.', ",")
}

pub fn format_employee_line<'a>(employee: impl Into<Option<&'a Employee>>) -> HrResult<String> {
    let employee = employee.into().ok_or_else(|| HrError::missing("employee"))?;
    let salary = format_currency(employee.salary())?;
    let birth_date = format_date(employee.birth_date())?;
    Ok(format!(
        "Name={:<10}Birth Date={:<15}Salary={:<15}Role={}",
        employee.name(),
        birth_date,
        salary,
        employee.role()
    ))
}
