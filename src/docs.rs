use crate::api::attendance::{AttendanceStatusResponse, DateQuery, MarkAttendance};
use crate::model::{
    AttendanceOverview, AttendanceRecord, AttendanceStatus, AttendanceSummary, Employee,
    EmployeeAttendance, EmployeeId, Role,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Attendance API",
        version = "0.1.0",
        description = r#"
## Attendance tracking for the HRM system

Records one present/absent mark per employee per calendar day and answers history,
point, summary and overview queries against the employee directory.

### Marking
- A mark creates the record for `(employeeId, date)` or overwrites it (last write wins).
- There is no unmark: a marked day stays marked.
- Past and future dates are accepted.

### Summaries
- `present` and `absent` list employee ids for one date.
- Employees with no mark that day appear in neither list.

### Errors
Every failure carries a machine readable `error` kind:
- `UNKNOWN_EMPLOYEE` (404) and `INVALID_DATE` (400): correct the request.
- `STORE_UNAVAILABLE` (503): storage or directory unreachable, retry with backoff.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::mark_attendance,
        crate::api::attendance::attendance_summary,
        crate::api::attendance::employee_attendance,
        crate::api::attendance::attendance_on,
        crate::api::attendance::attendance_overview,

        crate::api::employee::list_employees,
        crate::api::employee::get_employee
    ),
    components(
        schemas(
            MarkAttendance,
            DateQuery,
            AttendanceStatusResponse,
            AttendanceRecord,
            AttendanceStatus,
            AttendanceSummary,
            EmployeeAttendance,
            AttendanceOverview,
            Employee,
            EmployeeId,
            Role
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance marking and reporting APIs"),
        (name = "Employee", description = "Read-only employee directory APIs"),
    )
)]
pub struct ApiDoc;
