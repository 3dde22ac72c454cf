use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

use crate::model::EmployeeId;

pub type AttendanceResult<T> = Result<T, AttendanceError>;

/// Failure kinds reported to callers of the attendance core.
///
/// Validation failures (`UnknownEmployee`, `InvalidDate`) are raised before any write.
/// `StoreUnavailable` covers unreachable or timed out storage and directory calls; the core
/// never retries it.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    #[display(fmt = "unknown employee: {}", _0)]
    UnknownEmployee(EmployeeId),

    #[display(fmt = "invalid date: {:?}", _0)]
    InvalidDate(String),

    #[display(fmt = "store unavailable: {}", _0)]
    StoreUnavailable(String),
}

impl AttendanceError {
    pub fn kind(&self) -> &'static str {
        match self {
            AttendanceError::UnknownEmployee(_) => "UNKNOWN_EMPLOYEE",
            AttendanceError::InvalidDate(_) => "INVALID_DATE",
            AttendanceError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// True for failures a caller may retry with backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AttendanceError::StoreUnavailable(_))
    }

    pub fn timed_out(operation: &str) -> Self {
        AttendanceError::StoreUnavailable(format!("{operation} timed out"))
    }
}

impl std::error::Error for AttendanceError {}

impl From<sqlx::Error> for AttendanceError {
    fn from(e: sqlx::Error) -> Self {
        AttendanceError::StoreUnavailable(e.to_string())
    }
}

impl ResponseError for AttendanceError {
    fn status_code(&self) -> StatusCode {
        match self {
            AttendanceError::UnknownEmployee(_) => StatusCode::NOT_FOUND,
            AttendanceError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            AttendanceError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.kind(),
            "message": self.to_string()
        }))
    }
}
