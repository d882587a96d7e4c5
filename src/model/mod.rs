pub mod datetime;
pub mod employee;

pub use employee::{Employee, EmployeePatch, NewEmployee, RecentHire, TopEarner};
