use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::error::AttendanceError;
use crate::model::{
    AttendanceOverview, AttendanceRecord, AttendanceStatus, AttendanceSummary, EmployeeAttendance,
    EmployeeId,
};
use crate::service::{self, AttendanceService};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendance {
    #[schema(example = "E1", value_type = String)]
    pub employee_id: EmployeeId,
    /// Calendar date, `YYYY-MM-DD`
    #[schema(example = "2024-01-10", format = "date")]
    pub date: String,
    #[schema(example = true)]
    pub present: bool,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DateQuery {
    /// Calendar date `YYYY-MM-DD`, today when omitted
    #[schema(example = "2024-01-10")]
    pub date: Option<String>,
}

impl DateQuery {
    /// Resolves the requested date, falling back to today.
    fn resolve(&self) -> Result<NaiveDate, AttendanceError> {
        match self.date.as_deref() {
            Some(raw) => service::parse_attendance_date(raw),
            None => Ok(service::today()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatusResponse {
    #[schema(example = "E1", value_type = String)]
    pub employee_id: EmployeeId,
    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 200, description = "Attendance created or updated", body = AttendanceRecord),
        (status = 400, description = "Malformed date", body = Object, example = json!({
            "error": "INVALID_DATE",
            "message": "invalid date: \"2024-13-01\""
        })),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "error": "UNKNOWN_EMPLOYEE",
            "message": "unknown employee: E9"
        })),
        (status = 503, description = "Store unavailable, retry with backoff")
    ),
    tag = "Attendance"
)]
#[instrument(name = "api_mark_attendance", skip(service, payload), fields(employee_id = %payload.employee_id))]
pub async fn mark_attendance(
    service: web::Data<AttendanceService>,
    payload: web::Json<MarkAttendance>,
) -> actix_web::Result<HttpResponse> {
    let record = service
        .mark_attendance(&payload.employee_id, &payload.date, payload.present)
        .await?;

    Ok(HttpResponse::Ok().json(record))
}

/// Organization summary for one date
#[utoipa::path(
    get,
    path = "/api/attendance/summary",
    params(DateQuery),
    responses(
        (status = 200, description = "Present/absent partition; unmarked employees are in neither list", body = AttendanceSummary),
        (status = 400, description = "Malformed date"),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Attendance"
)]
pub async fn attendance_summary(
    service: web::Data<AttendanceService>,
    query: web::Query<DateQuery>,
) -> actix_web::Result<HttpResponse> {
    let date = query.resolve()?;
    let summary = service.get_attendance_summary(date).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Attendance history of one employee, most recent first
#[utoipa::path(
    get,
    path = "/api/attendance/summary/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "History ordered by date descending", body = EmployeeAttendance),
        (status = 404, description = "Unknown employee"),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Attendance"
)]
pub async fn employee_attendance(
    service: web::Data<AttendanceService>,
    path: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let employee_id = EmployeeId::new(path.into_inner());
    let history = service.get_employee_attendance(&employee_id).await?;
    Ok(HttpResponse::Ok().json(history))
}

/// Status of one employee on one date
#[utoipa::path(
    get,
    path = "/api/attendance/status/{employee_id}/{date}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        ("date", Path, description = "Calendar date YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "UNMARKED, PRESENT or ABSENT", body = AttendanceStatusResponse),
        (status = 400, description = "Malformed date"),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Attendance"
)]
pub async fn attendance_on(
    service: web::Data<AttendanceService>,
    path: web::Path<(String, String)>,
) -> actix_web::Result<HttpResponse> {
    let (employee_id, raw_date) = path.into_inner();
    let employee_id = EmployeeId::new(employee_id);
    let date = service::parse_attendance_date(&raw_date)?;

    let status = service.get_status_on(&employee_id, date).await?;
    Ok(HttpResponse::Ok().json(AttendanceStatusResponse {
        employee_id,
        date,
        status,
    }))
}

/// Head-counts and attendance rate for one date
#[utoipa::path(
    get,
    path = "/api/attendance/overview",
    params(DateQuery),
    responses(
        (status = 200, description = "Dashboard figures", body = AttendanceOverview),
        (status = 400, description = "Malformed date"),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Attendance"
)]
pub async fn attendance_overview(
    service: web::Data<AttendanceService>,
    query: web::Query<DateQuery>,
) -> actix_web::Result<HttpResponse> {
    let date = query.resolve()?;
    let overview = service.get_attendance_overview(date).await?;
    Ok(HttpResponse::Ok().json(overview))
}
