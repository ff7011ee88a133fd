//! Driving port listing employee accounts for the admin screen.

use async_trait::async_trait;

use crate::domain::{EmployeeSummary, Error};

/// Domain use-case port for the employee listing.
#[async_trait]
pub trait EmployeesQuery: Send + Sync {
    /// Every account with the `employee` role, in registration order.
    async fn list_employees(&self) -> Result<Vec<EmployeeSummary>, Error>;
}
