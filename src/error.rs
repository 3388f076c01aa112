use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EmployeeError {
    #[error("employee id must not be blank")]
    EmptyId,
    #[error("employee name must not be blank")]
    EmptyName,
}

pub type EmployeeResult<T> = Result<T, EmployeeError>;
