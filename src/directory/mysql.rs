use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};
use tracing::{debug, error};

use super::EmployeeDirectory;
use crate::error::{AttendanceError, AttendanceResult};
use crate::model::{Employee, EmployeeId, Role};

const EMPLOYEE_SELECT_SQL: &str = "SELECT id, name, department, email, role FROM employees";

#[derive(FromRow)]
struct EmployeeSql {
    id: String,
    name: String,
    department: String,
    email: String,
    role: String,
}

impl TryFrom<EmployeeSql> for Employee {
    type Error = AttendanceError;

    fn try_from(row: EmployeeSql) -> Result<Self, Self::Error> {
        let role = Role::from_str(&row.role).map_err(|_| {
            AttendanceError::StoreUnavailable(format!(
                "employee {} has unrecognised role {:?}",
                row.id, row.role
            ))
        })?;
        Ok(Employee {
            id: EmployeeId::new(row.id),
            name: row.name,
            department: row.department,
            email: row.email,
            role,
        })
    }
}

/// Directory backed by the `employees` table.
#[derive(Clone)]
pub struct MySqlEmployeeDirectory {
    pool: MySqlPool,
}

impl MySqlEmployeeDirectory {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeDirectory for MySqlEmployeeDirectory {
    async fn resolve(&self, id: &EmployeeId) -> AttendanceResult<Option<Employee>> {
        let sql = format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?");
        let row = sqlx::query_as::<_, EmployeeSql>(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, employee_id = %id, "Failed to resolve employee");
                AttendanceError::from(e)
            })?;

        row.map(Employee::try_from).transpose()
    }

    async fn list(&self) -> AttendanceResult<Vec<Employee>> {
        let sql = format!("{EMPLOYEE_SELECT_SQL} ORDER BY id");
        let rows = sqlx::query_as::<_, EmployeeSql>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list employees");
                AttendanceError::from(e)
            })?;
        debug!(count = rows.len(), "Fetched employee directory");

        rows.into_iter().map(Employee::try_from).collect()
    }
}
