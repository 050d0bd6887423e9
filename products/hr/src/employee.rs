use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single roster entry. Only the salary changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    name: String,
    birth_date: NaiveDate,
    salary: Decimal,
    role: String,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        salary: Decimal,
        role: impl Into<String>,
    ) -> Self {
        debug_assert!(!salary.is_sign_negative(), "salary must be non-negative");
        Self {
            name: name.into(),
            birth_date,
            salary,
            role: role.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub(crate) fn set_salary(&mut self, salary: Decimal) {
        self.salary = salary;
    }

    /// Completed years of age on `as_of`; zero if `as_of` precedes the birth date.
    pub fn age_on(&self, as_of: NaiveDate) -> u32 {
        as_of.years_since(self.birth_date).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_completed_years_only() {
        let caio = Employee::new("Caio", date(1961, 5, 2), dec!(9836.14), "Coordenador");
        assert_eq!(caio.age_on(date(2024, 5, 1)), 62);
        assert_eq!(caio.age_on(date(2024, 5, 2)), 63);
        assert_eq!(caio.age_on(date(1960, 1, 1)), 0);
    }

    #[test]
    fn salary_serializes_as_exact_decimal_text() {
        let maria = Employee::new("Maria", date(2000, 10, 18), dec!(2009.44), "Operador");
        let json = serde_json::to_value(&maria).unwrap();
        assert_eq!(json["salary"], "2009.44");
        assert_eq!(json["birth_date"], "2000-10-18");
        let back: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(back, maria);
    }
}
