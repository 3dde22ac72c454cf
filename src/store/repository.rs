use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::AttendanceResult;
use crate::model::{AttendanceRecord, EmployeeId};

/// Keyed persistence of attendance marks.
///
/// Implementations hold exactly one row per `(employee_id, date)`. `upsert` must apply as a
/// single atomic write; a dropped future has either fully applied or not applied at all.
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Creates or overwrites the record for the record's key and returns what is now stored.
    async fn upsert(&self, record: AttendanceRecord) -> AttendanceResult<AttendanceRecord>;

    /// All records of one employee, most recent date first.
    async fn history(&self, employee_id: &EmployeeId) -> AttendanceResult<Vec<AttendanceRecord>>;

    async fn find(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
    ) -> AttendanceResult<Option<AttendanceRecord>>;

    /// Every record stored for `date`, read as one consistent snapshot.
    async fn records_on(&self, date: NaiveDate) -> AttendanceResult<Vec<AttendanceRecord>>;

    async fn count_on(&self, date: NaiveDate) -> AttendanceResult<usize>;
}
