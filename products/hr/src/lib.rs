//! HR module: the employee roster, its queries, and display formatting.

mod employee;
mod error;
pub mod format;
pub mod query;
mod roster;

pub use employee::Employee;
pub use error::{HrError, HrResult};
pub use format::{DATE_PATTERN, format_currency, format_date, format_employee_line, format_ratio};
pub use query::{
    RoleGroup, filter_by_birth_month, find_oldest, group_by_role, increase_salary,
    ratio_to_constant, remove_by_name, sort_by_name, total_salary,
};
pub use roster::build_initial_roster;
