//! Attendance store: keyed storage of marks plus directory-checked queries over it.

mod memory;
mod mysql;
mod repository;

pub use memory::InMemoryAttendanceRepository;
pub use mysql::MySqlAttendanceRepository;
pub use repository::AttendanceRepository;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::directory::EmployeeDirectory;
use crate::error::{AttendanceError, AttendanceResult};
use crate::model::{AttendanceRecord, AttendanceSummary, Employee, EmployeeId};

/// Runs `fut` with an upper bound; elapsing is reported as `StoreUnavailable`.
pub(crate) async fn bounded<T, F>(
    limit: Duration,
    operation: &'static str,
    fut: F,
) -> AttendanceResult<T>
where
    F: Future<Output = AttendanceResult<T>>,
{
    match actix_web::rt::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!(operation, timeout_ms = limit.as_millis() as u64, "Operation timed out");
            Err(AttendanceError::timed_out(operation))
        }
    }
}

/// Marks and queries over a repository, validated against the employee directory.
///
/// `directory` is authoritative and checks every write and history read. `lookups` may be a
/// cached view of the same directory and only serves read-only employee resolution.
#[derive(Clone)]
pub struct AttendanceStore {
    repo: Arc<dyn AttendanceRepository>,
    directory: Arc<dyn EmployeeDirectory>,
    lookups: Arc<dyn EmployeeDirectory>,
    timeout: Duration,
}

impl AttendanceStore {
    pub fn new(
        repo: Arc<dyn AttendanceRepository>,
        directory: Arc<dyn EmployeeDirectory>,
        timeout: Duration,
    ) -> Self {
        Self {
            repo,
            lookups: directory.clone(),
            directory,
            timeout,
        }
    }

    /// Serves `lookup_employee` from `lookups` instead of the authoritative directory.
    pub fn with_lookup_cache(mut self, lookups: Arc<dyn EmployeeDirectory>) -> Self {
        self.lookups = lookups;
        self
    }

    /// Resolves `employee_id` against the authoritative directory or fails with `UnknownEmployee`.
    async fn require_employee(&self, employee_id: &EmployeeId) -> AttendanceResult<Employee> {
        Self::resolve_in(&self.directory, self.timeout, employee_id).await
    }

    /// Read-only resolution, possibly answered from the lookup cache.
    pub async fn lookup_employee(&self, employee_id: &EmployeeId) -> AttendanceResult<Employee> {
        Self::resolve_in(&self.lookups, self.timeout, employee_id).await
    }

    async fn resolve_in(
        directory: &Arc<dyn EmployeeDirectory>,
        timeout: Duration,
        employee_id: &EmployeeId,
    ) -> AttendanceResult<Employee> {
        bounded(timeout, "employee directory lookup", directory.resolve(employee_id))
            .await?
            .ok_or_else(|| AttendanceError::UnknownEmployee(employee_id.clone()))
    }

    pub async fn known_employees(&self) -> AttendanceResult<Vec<Employee>> {
        bounded(self.timeout, "employee directory listing", self.directory.list()).await
    }

    /// Creates or overwrites the mark for `(employee_id, date)`.
    ///
    /// Repeating the call with the same arguments leaves the same single record.
    pub async fn upsert(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
        present: bool,
    ) -> AttendanceResult<AttendanceRecord> {
        self.require_employee(employee_id).await?;

        let record = AttendanceRecord::new(employee_id.clone(), date, present);
        bounded(self.timeout, "attendance upsert", self.repo.upsert(record)).await
    }

    /// History of one known employee, most recent date first. Empty when never marked.
    pub async fn get_history(
        &self,
        employee_id: &EmployeeId,
    ) -> AttendanceResult<Vec<AttendanceRecord>> {
        self.require_employee(employee_id).await?;
        bounded(self.timeout, "attendance history", self.repo.history(employee_id)).await
    }

    /// Point lookup. `None` means unmarked.
    pub async fn get_on(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
    ) -> AttendanceResult<Option<AttendanceRecord>> {
        bounded(self.timeout, "attendance lookup", self.repo.find(employee_id, date)).await
    }

    /// Partitions the directory into present and absent for `date`.
    pub async fn get_summary(&self, date: NaiveDate) -> AttendanceResult<AttendanceSummary> {
        let employees = self.known_employees().await?;
        self.summarize(date, &employees).await
    }

    pub(crate) async fn summarize(
        &self,
        date: NaiveDate,
        employees: &[Employee],
    ) -> AttendanceResult<AttendanceSummary> {
        let marks: HashMap<EmployeeId, bool> =
            bounded(self.timeout, "attendance summary", self.repo.records_on(date))
                .await?
                .into_iter()
                .map(|r| (r.employee_id, r.present))
                .collect();

        let mut summary = AttendanceSummary::empty(date);
        for employee in employees {
            match marks.get(&employee.id) {
                Some(true) => summary.present.push(employee.id.clone()),
                Some(false) => summary.absent.push(employee.id.clone()),
                None => {}
            }
        }
        summary.present.sort();
        summary.present.dedup();
        summary.absent.sort();
        summary.absent.dedup();

        debug!(
            %date,
            present = summary.present.len(),
            absent = summary.absent.len(),
            total = employees.len(),
            "Attendance summary computed"
        );
        Ok(summary)
    }
}
