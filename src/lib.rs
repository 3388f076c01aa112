//! Employee records for the HR vertical.

mod employee;
mod error;

pub use employee::Employee;
pub use error::{EmployeeError, EmployeeResult};
