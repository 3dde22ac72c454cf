use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use crate::model::employee::EmployeeId;

/// One day's mark for one employee. At most one exists per `(employee_id, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub employee_id: EmployeeId,

    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = true)]
    pub present: bool,
}

impl AttendanceRecord {
    pub fn new(employee_id: EmployeeId, date: NaiveDate, present: bool) -> Self {
        Self {
            employee_id,
            date,
            present,
        }
    }

    pub fn status(&self) -> AttendanceStatus {
        if self.present {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }
}

/// State of a single `(employee, date)` key.
///
/// `Unmarked` is only reachable by never marking; no transition leads back to it.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, AsRefStr, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AttendanceStatus {
    Unmarked,
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn of(record: Option<&AttendanceRecord>) -> Self {
        record.map_or(AttendanceStatus::Unmarked, AttendanceRecord::status)
    }

    /// Applies a mark. Every state moves to `Present` or `Absent`.
    pub fn mark(self, present: bool) -> Self {
        if present {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }
}

/// Present/absent partition of the directory for one date. Unmarked employees are in neither list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "date": "2024-01-10",
    "present": ["E1"],
    "absent": ["E2"]
}))]
pub struct AttendanceSummary {
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    pub present: Vec<EmployeeId>,
    pub absent: Vec<EmployeeId>,
}

impl AttendanceSummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            present: Vec::new(),
            absent: Vec::new(),
        }
    }

    pub fn marked_count(&self) -> usize {
        self.present.len() + self.absent.len()
    }
}

/// Full history of one employee, most recent date first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAttendance {
    pub employee_id: EmployeeId,
    pub records: Vec<AttendanceRecord>,
}

impl EmployeeAttendance {
    /// Read-side lookup of a single day, e.g. today's status for a history view.
    pub fn status_on(&self, date: NaiveDate) -> AttendanceStatus {
        AttendanceStatus::of(self.records.iter().find(|r| r.date == date))
    }
}

/// Organization-wide figures for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "date": "2024-01-10",
    "totalEmployees": 2,
    "presentCount": 1,
    "absentCount": 1,
    "unmarkedCount": 0,
    "attendanceRate": 50.0
}))]
pub struct AttendanceOverview {
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    pub total_employees: usize,
    pub present_count: usize,
    pub absent_count: usize,
    pub unmarked_count: usize,
    pub attendance_rate: f64,
}
