//! Read-only client side of the employee directory.
//!
//! The directory owns employee identity; the attendance core only resolves ids against it.

mod cached;
mod memory;
mod mysql;

pub use cached::CachedEmployeeDirectory;
pub use memory::InMemoryEmployeeDirectory;
pub use mysql::MySqlEmployeeDirectory;

use async_trait::async_trait;

use crate::error::AttendanceResult;
use crate::model::{Employee, EmployeeId};

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Looks up one employee. `Ok(None)` means the id is not known to the directory.
    async fn resolve(&self, id: &EmployeeId) -> AttendanceResult<Option<Employee>>;

    /// Every employee currently in the directory.
    async fn list(&self) -> AttendanceResult<Vec<Employee>>;
}
