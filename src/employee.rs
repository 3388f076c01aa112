use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EmployeeError, EmployeeResult};

/// One employee's identity and contact record.
///
/// Plain value object: every field is public and freely mutable. `phone`,
/// `address`, and `email` are free-form strings with no enforced format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    /// Calendar date only, no time component.
    pub hired_date: NaiveDate,
    /// true = active, false = inactive.
    pub status: bool,
}

impl Employee {
    /// Build a record, rejecting a blank id or name.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
        hired_date: NaiveDate,
        status: bool,
    ) -> EmployeeResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EmployeeError::EmptyId);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EmployeeError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            phone: phone.into(),
            address: address.into(),
            email: email.into(),
            hired_date,
            status,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status
    }
}
