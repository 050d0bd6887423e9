//! Roster queries and transforms.
//!
//! Everything here is pure except [`remove_by_name`], [`increase_salary`] and
//! [`sort_by_name`], which mutate the working roster in place.

use chrono::{Datelike, Month};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::{Employee, HrError, HrResult};

/// Employees sharing one role, in roster order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoleGroup<'a> {
    pub role: &'a str,
    pub members: Vec<&'a Employee>,
}

/// Removes every employee named exactly `name` and returns how many were dropped.
pub fn remove_by_name(roster: &mut Vec<Employee>, name: &str) -> usize {
    let before = roster.len();
    roster.retain(|employee| employee.name() != name);
    before - roster.len()
}

/// Multiplies every salary by `1 + percentage`.
///
/// Either every salary is updated or none is.
pub fn increase_salary(
    roster: &mut [Employee],
    percentage: impl Into<Option<Decimal>>,
) -> HrResult<()> {
    let percentage = percentage.into().ok_or_else(|| HrError::missing("percentage"))?;
    if percentage < Decimal::NEGATIVE_ONE {
        return Err(HrError::invalid("percentage", "must not be below -1"));
    }
    let factor = Decimal::ONE + percentage;
    let raised = roster
        .iter()
        .map(|employee| employee.salary().checked_mul(factor))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| HrError::invalid("percentage", "salary overflow"))?;
    for (employee, salary) in roster.iter_mut().zip(raised) {
        employee.set_salary(salary);
    }
    Ok(())
}

/// Partitions the roster by role. Groups appear in order of first occurrence.
pub fn group_by_role(roster: &[Employee]) -> Vec<RoleGroup<'_>> {
    let mut groups: Vec<RoleGroup<'_>> = Vec::new();
    for employee in roster {
        match groups.iter_mut().find(|group| group.role == employee.role()) {
            Some(group) => group.members.push(employee),
            None => groups.push(RoleGroup {
                role: employee.role(),
                members: vec![employee],
            }),
        }
    }
    groups
}

pub fn filter_by_birth_month<'a>(roster: &'a [Employee], months: &[Month]) -> Vec<&'a Employee> {
    roster
        .iter()
        .filter(|employee| {
            let month = employee.birth_date().month();
            months.iter().any(|m| m.number_from_month() == month)
        })
        .collect()
}

/// All employees born on the earliest birth date, in roster order.
pub fn find_oldest(roster: &[Employee]) -> Vec<&Employee> {
    let Some(earliest) = roster.iter().map(Employee::birth_date).min() else {
        return Vec::new();
    };
    roster
        .iter()
        .filter(|employee| employee.birth_date() == earliest)
        .collect()
}

pub fn total_salary(roster: &[Employee]) -> HrResult<Decimal> {
    roster
        .iter()
        .try_fold(Decimal::ZERO, |total, employee| total.checked_add(employee.salary()))
        .ok_or_else(|| HrError::invalid("roster", "salary total overflow"))
}

/// `salary / constant`, ties rounded toward zero at the salary's own scale.
pub fn ratio_to_constant(salary: Decimal, constant: Decimal) -> HrResult<Decimal> {
    if constant.is_zero() {
        return Err(HrError::invalid("constant", "must not be zero"));
    }
    let quotient = salary
        .checked_div(constant)
        .ok_or_else(|| HrError::invalid("constant", "quotient overflow"))?;
    Ok(quotient.round_dp_with_strategy(salary.scale(), RoundingStrategy::MidpointTowardZero))
}

/// Stable ascending sort on the employee name.
pub fn sort_by_name(roster: &mut [Employee]) {
    roster.sort_by(|a, b| a.name().cmp(b.name()));
}
