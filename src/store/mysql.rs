use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, MySqlPool};
use tracing::{debug, error};

use super::AttendanceRepository;
use crate::error::{AttendanceError, AttendanceResult};
use crate::model::{AttendanceRecord, EmployeeId};

#[derive(FromRow)]
struct AttendanceSql {
    employee_id: String,
    date: NaiveDate,
    present: bool,
}

impl From<AttendanceSql> for AttendanceRecord {
    fn from(row: AttendanceSql) -> Self {
        AttendanceRecord::new(EmployeeId::new(row.employee_id), row.date, row.present)
    }
}

/// Attendance table `attendance_marks`, primary key `(employee_id, date)`.
#[derive(Clone)]
pub struct MySqlAttendanceRepository {
    pool: MySqlPool,
}

impl MySqlAttendanceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn db_error(operation: &'static str) -> impl Fn(sqlx::Error) -> AttendanceError {
    move |e| {
        error!(error = %e, operation, "Attendance query failed");
        AttendanceError::from(e)
    }
}

#[async_trait]
impl AttendanceRepository for MySqlAttendanceRepository {
    async fn upsert(&self, record: AttendanceRecord) -> AttendanceResult<AttendanceRecord> {
        // Single statement: the row lock on the key serializes concurrent marks.
        sqlx::query(
            r#"
            INSERT INTO attendance_marks (employee_id, date, present)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE present = VALUES(present)
            "#,
        )
        .bind(record.employee_id.as_str())
        .bind(record.date)
        .bind(record.present)
        .execute(&self.pool)
        .await
        .map_err(db_error("upsert"))?;

        debug!(employee_id = %record.employee_id, date = %record.date, present = record.present, "Attendance upserted");
        Ok(record)
    }

    async fn history(&self, employee_id: &EmployeeId) -> AttendanceResult<Vec<AttendanceRecord>> {
        let rows = sqlx::query_as::<_, AttendanceSql>(
            r#"
            SELECT employee_id, date, present
            FROM attendance_marks
            WHERE employee_id = ?
            ORDER BY date DESC
            "#,
        )
        .bind(employee_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("history"))?;

        Ok(rows.into_iter().map(AttendanceRecord::from).collect())
    }

    async fn find(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
    ) -> AttendanceResult<Option<AttendanceRecord>> {
        let row = sqlx::query_as::<_, AttendanceSql>(
            r#"
            SELECT employee_id, date, present
            FROM attendance_marks
            WHERE employee_id = ? AND date = ?
            "#,
        )
        .bind(employee_id.as_str())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("find"))?;

        Ok(row.map(AttendanceRecord::from))
    }

    async fn records_on(&self, date: NaiveDate) -> AttendanceResult<Vec<AttendanceRecord>> {
        let rows = sqlx::query_as::<_, AttendanceSql>(
            r#"
            SELECT employee_id, date, present
            FROM attendance_marks
            WHERE date = ?
            ORDER BY employee_id
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("records_on"))?;

        Ok(rows.into_iter().map(AttendanceRecord::from).collect())
    }

    async fn count_on(&self, date: NaiveDate) -> AttendanceResult<usize> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM attendance_marks WHERE date = ?",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("count_on"))?;

        Ok(usize::try_from(total).unwrap_or_default())
    }
}
