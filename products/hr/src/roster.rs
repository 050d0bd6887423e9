//! The fixed reference roster.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::Employee;

struct Seed {
    name: &'static str,
    birth_date: NaiveDate,
    salary: Decimal,
    role: &'static str,
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid roster birth date"),
    }
}

#[rustfmt::skip]
const REFERENCE_ROSTER: [Seed; 10] = [
    Seed { name: "Maria", birth_date: date(2000, 10, 18), salary: dec!(2009.44), role: "Operador" },
    Seed { name: "João", birth_date: date(1990, 5, 12), salary: dec!(2284.38), role: "Operador" },
    Seed { name: "Caio", birth_date: date(1961, 5, 2), salary: dec!(9836.14), role: "Coordenador" },
    Seed { name: "Miguel", birth_date: date(1988, 10, 14), salary: dec!(19119.88), role: "Diretor" },
    Seed { name: "Alice", birth_date: date(1995, 1, 5), salary: dec!(2234.68), role: "Recepcionista" },
    Seed { name: "Heitor", birth_date: date(1999, 11, 19), salary: dec!(1582.72), role: "Operador" },
    Seed { name: "Arthur", birth_date: date(1993, 3, 31), salary: dec!(4071.84), role: "Contador" },
    Seed { name: "Laura", birth_date: date(1994, 7, 8), salary: dec!(3017.45), role: "Gerente" },
    Seed { name: "Heloísa", birth_date: date(2003, 5, 24), salary: dec!(1606.85), role: "Eletricista" },
    Seed { name: "Helena", birth_date: date(1996, 9, 2), salary: dec!(2799.93), role: "Gerente" },
];

/// Returns the ten reference employees in insertion order.
pub fn build_initial_roster() -> Vec<Employee> {
    REFERENCE_ROSTER
        .iter()
        .map(|seed| Employee::new(seed.name, seed.birth_date, seed.salary, seed.role))
        .collect()
}
