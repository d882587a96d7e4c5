//! Test fixtures: fresh in-memory stores and synthetic employees.
#![allow(dead_code)]

use chrono::{Duration, NaiveDateTime};
use employee_records::{
    model::{NewEmployee, datetime},
    store::EmployeeStore,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

pub async fn empty_store() -> EmployeeStore {
    EmployeeStore::in_memory().await.unwrap()
}

pub fn ts(raw: &str) -> NaiveDateTime {
    datetime::parse(raw).unwrap()
}

pub fn employee(name: &str, department: &str, salary: f64, hire_date: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        department: department.to_string(),
        salary,
        hire_date: ts(hire_date),
    }
}

/// Inserts `(name, department, salary, hire_date)` rows, returns their ids.
pub async fn seed(store: &EmployeeStore, rows: &[(&str, &str, f64, &str)]) -> Vec<i64> {
    let mut ids = Vec::with_capacity(rows.len());
    for (name, department, salary, hire_date) in rows {
        ids.push(
            store
                .create(&employee(name, department, *salary, hire_date))
                .await
                .unwrap(),
        );
    }
    ids
}

/// `count` random but valid employees spread over `departments`, hired
/// between 2020-01-01 and the end of 2024.
pub fn synthetic_employees(seed: u64, count: usize, departments: &[&str]) -> Vec<NewEmployee> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = ts("2020-01-01 00:00:00");

    (0..count)
        .map(|i| NewEmployee {
            name: format!("Employee {i}"),
            department: departments[rng.gen_range(0..departments.len())].to_string(),
            salary: rng.gen_range(20_000.0..250_000.0),
            hire_date: start
                + Duration::days(rng.gen_range(0..1_800))
                + Duration::seconds(rng.gen_range(0..86_400)),
        })
        .collect()
}

pub async fn seed_synthetic(store: &EmployeeStore, employees: &[NewEmployee]) {
    for employee in employees {
        store.create(employee).await.unwrap();
    }
}
