//! Attendance use-case service.
//!
//! # Responsibility
//! - Single entry point for marking and querying attendance.
//! - Validates input before the store is touched.
//!
//! # Invariants
//! - Invalid dates and unknown employees never reach the repository.
//! - "Today" is resolved by the caller and passed in as a plain date.

use chrono::{Local, NaiveDate};
use tracing::{info, instrument};

use crate::error::{AttendanceError, AttendanceResult};
use crate::model::{
    AttendanceOverview, AttendanceRecord, AttendanceStatus, AttendanceSummary, Employee,
    EmployeeAttendance, EmployeeId,
};
use crate::store::AttendanceStore;

/// Current local calendar date. Call once per request and pass the value down.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a strict ISO `YYYY-MM-DD` calendar date.
pub fn parse_attendance_date(raw: &str) -> AttendanceResult<NaiveDate> {
    let well_formed = raw.len() == 10
        && raw
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if !well_formed {
        return Err(AttendanceError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AttendanceError::InvalidDate(raw.to_string()))
}

/// `present / total * 100`, one decimal place. Zero when there are no employees.
pub fn compute_attendance_rate(summary: &AttendanceSummary, total_employees: usize) -> f64 {
    if total_employees == 0 {
        return 0.0;
    }
    let rate = summary.present.len() as f64 / total_employees as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

#[derive(Clone)]
pub struct AttendanceService {
    store: AttendanceStore,
}

impl AttendanceService {
    pub fn new(store: AttendanceStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &AttendanceStore {
        &self.store
    }

    /// Records `present` for the employee on `date`, overwriting any earlier mark.
    #[instrument(name = "mark_attendance", skip(self, employee_id), fields(employee_id = %employee_id))]
    pub async fn mark_attendance(
        &self,
        employee_id: &EmployeeId,
        date: &str,
        present: bool,
    ) -> AttendanceResult<AttendanceRecord> {
        let date = parse_attendance_date(date)?;
        let record = self.store.upsert(employee_id, date, present).await?;
        info!(%date, status = %record.status(), "Attendance marked");
        Ok(record)
    }

    #[instrument(name = "employee_attendance", skip(self, employee_id), fields(employee_id = %employee_id))]
    pub async fn get_employee_attendance(
        &self,
        employee_id: &EmployeeId,
    ) -> AttendanceResult<EmployeeAttendance> {
        let records = self.store.get_history(employee_id).await?;
        Ok(EmployeeAttendance {
            employee_id: employee_id.clone(),
            records,
        })
    }

    pub async fn get_status_on(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
    ) -> AttendanceResult<AttendanceStatus> {
        let record = self.store.get_on(employee_id, date).await?;
        Ok(AttendanceStatus::of(record.as_ref()))
    }

    #[instrument(name = "attendance_summary", skip(self))]
    pub async fn get_attendance_summary(
        &self,
        date: NaiveDate,
    ) -> AttendanceResult<AttendanceSummary> {
        self.store.get_summary(date).await
    }

    /// Summary plus head-counts and rate against the current directory size.
    #[instrument(name = "attendance_overview", skip(self))]
    pub async fn get_attendance_overview(
        &self,
        date: NaiveDate,
    ) -> AttendanceResult<AttendanceOverview> {
        let employees = self.store.known_employees().await?;
        let summary = self.store.summarize(date, &employees).await?;
        let total = employees.len();

        Ok(AttendanceOverview {
            date,
            total_employees: total,
            present_count: summary.present.len(),
            absent_count: summary.absent.len(),
            unmarked_count: total.saturating_sub(summary.marked_count()),
            attendance_rate: compute_attendance_rate(&summary, total),
        })
    }

    pub async fn resolve_employee(&self, employee_id: &EmployeeId) -> AttendanceResult<Employee> {
        self.store.lookup_employee(employee_id).await
    }

    pub async fn list_employees(&self) -> AttendanceResult<Vec<Employee>> {
        self.store.known_employees().await
    }
}
