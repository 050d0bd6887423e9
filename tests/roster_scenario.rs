use chrono::{Month, NaiveDate};
use products_hr::{
    DATE_PATTERN, Employee, HrError, build_initial_roster, filter_by_birth_month, find_oldest,
    format_currency, format_date, group_by_role, increase_salary, ratio_to_constant,
    remove_by_name, sort_by_name, total_salary,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn names<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Vec<&'a str> {
    employees.into_iter().map(Employee::name).collect()
}

#[test]
fn reference_run_end_to_end() {
    let mut roster = build_initial_roster();
    assert_eq!(roster.len(), 10);

    assert_eq!(remove_by_name(&mut roster, "João"), 1);
    assert_eq!(roster.len(), 9);

    increase_salary(&mut roster, dec!(0.1)).unwrap();
    let maria = roster.iter().find(|e| e.name() == "Maria").unwrap();
    assert_eq!(maria.salary(), dec!(2009.44) * dec!(1.1));
    assert_eq!(maria.salary(), dec!(2210.384));

    let groups = group_by_role(&roster);
    let operador = groups.iter().find(|g| g.role == "Operador").unwrap();
    assert_eq!(names(operador.members.iter().copied()), ["Maria", "Heitor"]);

    let october_or_december =
        filter_by_birth_month(&roster, &[Month::October, Month::December]);
    assert_eq!(names(october_or_december), ["Maria", "Miguel"]);

    let oldest = find_oldest(&roster);
    assert_eq!(names(oldest.iter().copied()), ["Caio"]);
    let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(oldest[0].age_on(as_of), 62);

    sort_by_name(&mut roster);
    assert_eq!(roster[0].name(), "Alice");

    let total = total_salary(&roster).unwrap();
    assert_eq!(total, dec!(50906.823));
    assert_eq!(format_currency(total).unwrap(), "50.906,823");

    let wages: Vec<Decimal> = roster
        .iter()
        .map(|e| ratio_to_constant(e.salary(), dec!(1212.00)).unwrap())
        .collect();
    assert_eq!(wages[0], dec!(2.028));
    assert_eq!(*wages.last().unwrap(), dec!(17.353));
}

#[test]
fn missing_inputs_surface_invalid_argument() {
    let mut roster = build_initial_roster();
    assert!(matches!(
        increase_salary(&mut roster, None::<Decimal>),
        Err(HrError::InvalidArgument { param: "percentage", .. })
    ));
    assert!(matches!(
        format_date(None::<NaiveDate>),
        Err(HrError::InvalidArgument { param: "date", .. })
    ));
}

#[test]
fn every_reference_date_round_trips() {
    for employee in build_initial_roster() {
        let text = format_date(employee.birth_date()).unwrap();
        let parsed = NaiveDate::parse_from_str(&text, DATE_PATTERN).unwrap();
        assert_eq!(parsed, employee.birth_date());
    }
}

#[test]
fn empty_roster_is_valid_input() {
    let mut roster: Vec<Employee> = Vec::new();
    assert_eq!(remove_by_name(&mut roster, "João"), 0);
    increase_salary(&mut roster, dec!(0.1)).unwrap();
    assert!(group_by_role(&roster).is_empty());
    assert!(find_oldest(&roster).is_empty());
    assert_eq!(total_salary(&roster).unwrap(), Decimal::ZERO);
}

#[test]
fn grouped_roster_serializes_for_inspection() {
    let roster = build_initial_roster();
    let groups = group_by_role(&roster);
    let json = serde_json::to_value(&groups).unwrap();
    assert_eq!(json[0]["role"], "Operador");
    assert_eq!(json[0]["members"][1]["name"], "João");
    assert_eq!(json[0]["members"][1]["salary"], "2284.38");
}
