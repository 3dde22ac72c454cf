use actix_web::{HttpResponse, web};

use crate::model::{Employee, EmployeeId};
use crate::service::AttendanceService;

/// List employees known to the directory
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Employee directory", body = [Employee]),
        (status = 503, description = "Directory unavailable")
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    service: web::Data<AttendanceService>,
) -> actix_web::Result<HttpResponse> {
    let employees = service.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Resolve one employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "UNKNOWN_EMPLOYEE",
            "message": "unknown employee: E9"
        })),
        (status = 503, description = "Directory unavailable")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    service: web::Data<AttendanceService>,
    path: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let employee_id = EmployeeId::new(path.into_inner());
    let employee = service.resolve_employee(&employee_id).await?;
    Ok(HttpResponse::Ok().json(employee))
}
