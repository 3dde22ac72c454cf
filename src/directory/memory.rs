use std::collections::BTreeMap;
use std::path::Path;
use std::sync::RwLock;

use anyhow::Context;
use async_trait::async_trait;

use super::EmployeeDirectory;
use crate::error::{AttendanceError, AttendanceResult};
use crate::model::{Employee, EmployeeId};

/// Directory held in process memory, keyed by id.
#[derive(Default)]
pub struct InMemoryEmployeeDirectory {
    employees: RwLock<BTreeMap<EmployeeId, Employee>>,
}

impl InMemoryEmployeeDirectory {
    pub fn new(employees: impl IntoIterator<Item = Employee>) -> Self {
        let employees = employees
            .into_iter()
            .map(|e| (e.id.clone(), e))
            .collect::<BTreeMap<_, _>>();
        Self {
            employees: RwLock::new(employees),
        }
    }

    /// Loads a JSON array of employees.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading employee seed file {}", path.display()))?;
        let employees: Vec<Employee> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing employee seed file {}", path.display()))?;
        tracing::info!(count = employees.len(), path = %path.display(), "Employee directory seeded");
        Ok(Self::new(employees))
    }

    pub fn insert(&self, employee: Employee) -> AttendanceResult<()> {
        let mut employees = self.employees.write().map_err(|_| poisoned())?;
        employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    /// Drops an employee, returning it when it was present.
    pub fn remove(&self, id: &EmployeeId) -> AttendanceResult<Option<Employee>> {
        let mut employees = self.employees.write().map_err(|_| poisoned())?;
        Ok(employees.remove(id))
    }
}

fn poisoned() -> AttendanceError {
    AttendanceError::StoreUnavailable("employee directory lock poisoned".to_string())
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn resolve(&self, id: &EmployeeId) -> AttendanceResult<Option<Employee>> {
        let employees = self.employees.read().map_err(|_| poisoned())?;
        Ok(employees.get(id).cloned())
    }

    async fn list(&self) -> AttendanceResult<Vec<Employee>> {
        let employees = self.employees.read().map_err(|_| poisoned())?;
        Ok(employees.values().cloned().collect())
    }
}
