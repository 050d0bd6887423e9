use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Month, NaiveDate};
use products_hr::{
    Employee, build_initial_roster, filter_by_birth_month, find_oldest, format_currency,
    format_employee_line, format_ratio, group_by_role, increase_salary, ratio_to_constant,
    remove_by_name, sort_by_name, total_salary,
};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::AppConfig;

const SEPARATOR: &str = "==================================================";
const GROUP_SEPARATOR: &str = "------------------------------------";

/// Runs every roster step in order, writing the report to `out`.
pub fn write_report(out: &mut impl Write, config: &AppConfig, as_of: NaiveDate) -> Result<()> {
    section(out, "Creating list of employees...")?;
    let mut roster = build_initial_roster();
    debug!(count = roster.len(), "roster built");

    section(out, &format!("Removing employee named '{}'...", config.remove_name))?;
    let removed = remove_by_name(&mut roster, &config.remove_name);
    info!(name = %config.remove_name, removed, "employees removed");

    heading(out, "Printing all employees with their data:")?;
    for employee in &roster {
        writeln!(out, "{}", format_employee_line(employee)?)?;
    }

    let label = percent_label(config.raise_percentage)?;
    section(out, &format!("Increasing employees' salary by {label}%..."))?;
    increase_salary(&mut roster, config.raise_percentage).context("salary increase failed")?;
    info!(percentage = %config.raise_percentage, "raise applied");

    heading(out, "Printing employees by role:")?;
    let groups = group_by_role(&roster);
    debug!(groups = groups.len(), "roster grouped by role");
    for group in &groups {
        writeln!(out, "{GROUP_SEPARATOR}")?;
        writeln!(out, "{}:", group.role)?;
        writeln!(out)?;
        write_names(out, group.members.iter().copied())?;
    }

    heading(
        out,
        &format!(
            "Printing employees whose birthdays are in the {} month:",
            month_list(&config.birth_months)
        ),
    )?;
    write_names(out, filter_by_birth_month(&roster, &config.birth_months))?;

    heading(out, "Printing the oldest employees' name and age:")?;
    let oldest = find_oldest(&roster);
    info!(count = oldest.len(), "oldest employees found");
    for employee in oldest {
        writeln!(out, "Name={:<10}Age={} years", employee.name(), employee.age_on(as_of))?;
    }

    heading(out, "Printing the list of employees in alphabetical order:")?;
    sort_by_name(&mut roster);
    write_names(out, &roster)?;

    heading(out, "Printing the total salary of employees:")?;
    let total = total_salary(&roster).context("salary total failed")?;
    info!(total = %total, "total salary computed");
    writeln!(out, "{}", format_currency(total)?)?;

    heading(out, "Printing how many minimum wages each employee earns:")?;
    for employee in &roster {
        let wages = ratio_to_constant(employee.salary(), config.minimum_wage)?;
        writeln!(
            out,
            "Name={:<10}Total number of minimum wages={}",
            employee.name(),
            format_ratio(wages)
        )?;
    }
    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "{title}")?;
    Ok(())
}

fn heading(out: &mut impl Write, title: &str) -> Result<()> {
    section(out, title)?;
    writeln!(out)?;
    Ok(())
}

fn write_names<'a>(
    out: &mut impl Write,
    employees: impl IntoIterator<Item = &'a Employee>,
) -> Result<()> {
    for employee in employees {
        writeln!(out, "{}", employee.name())?;
    }
    Ok(())
}

fn percent_label(percentage: Decimal) -> Result<String> {
    let percent = percentage
        .checked_mul(Decimal::ONE_HUNDRED)
        .with_context(|| format!("raise percentage {percentage} is out of range"))?;
    Ok(percent.normalize().to_string())
}

/// `[October, December]` renders as `10th or 12th`.
fn month_list(months: &[Month]) -> String {
    let ordinals: Vec<String> = months
        .iter()
        .map(|month| ordinal(month.number_from_month()))
        .collect();
    match ordinals.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
