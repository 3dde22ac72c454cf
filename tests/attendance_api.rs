mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web::Data};
use common::fixture;
use hrm_attendance::AttendanceService;
use hrm_attendance::config::Config;
use hrm_attendance::routes;
use hrm_attendance::store::InMemoryAttendanceRepository;
use serde_json::{Value, json};

macro_rules! app {
    ($service:expr) => {{
        let config = Config::in_memory();
        test::init_service(
            App::new()
                .app_data(Data::new($service))
                .configure(|cfg| routes::configure(cfg, &config)),
        )
        .await
    }};
}

fn mark(employee_id: &str, date: &str, present: bool) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(json!({"employeeId": employee_id, "date": date, "present": present}))
}

#[actix_web::test]
async fn mark_then_summary_and_history() {
    let f = fixture();
    let app = app!(f.service.clone());

    let resp = test::call_service(&app, mark("E1", "2024-01-10", true).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"employeeId": "E1", "date": "2024-01-10", "present": true}));

    test::call_service(&app, mark("E2", "2024-01-10", false).to_request()).await;
    test::call_service(&app, mark("E1", "2024-01-11", false).to_request()).await;

    let req = test::TestRequest::get()
        .uri("/api/attendance/summary?date=2024-01-10")
        .to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        summary,
        json!({"date": "2024-01-10", "present": ["E1"], "absent": ["E2"]})
    );

    let req = test::TestRequest::get()
        .uri("/api/attendance/summary/E1")
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        history,
        json!({
            "employeeId": "E1",
            "records": [
                {"employeeId": "E1", "date": "2024-01-11", "present": false},
                {"employeeId": "E1", "date": "2024-01-10", "present": true}
            ]
        })
    );
}

#[actix_web::test]
async fn point_lookup_reports_unmarked() {
    let f = fixture();
    let app = app!(f.service.clone());

    let req = test::TestRequest::get()
        .uri("/api/attendance/status/E2/2024-01-10")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "UNMARKED");

    test::call_service(&app, mark("E2", "2024-01-10", true).to_request()).await;
    let req = test::TestRequest::get()
        .uri("/api/attendance/status/E2/2024-01-10")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "PRESENT");
}

#[actix_web::test]
async fn point_lookup_reaches_employee_named_like_a_route() {
    let f = fixture();
    f.directory.insert(common::employee("summary", "Sales")).unwrap();
    let app = app!(f.service.clone());

    let resp = test::call_service(&app, mark("summary", "2024-01-10", true).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/attendance/status/summary/2024-01-10")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"employeeId": "summary", "date": "2024-01-10", "status": "PRESENT"})
    );

    let req = test::TestRequest::get()
        .uri("/api/attendance/summary/summary")
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(history["records"].as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn summary_and_overview_default_to_today() {
    let f = fixture();
    let app = app!(f.service.clone());
    let today = hrm_attendance::service::today().to_string();

    test::call_service(&app, mark("E1", &today, true).to_request()).await;

    let req = test::TestRequest::get()
        .uri("/api/attendance/summary")
        .to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(summary, json!({"date": today, "present": ["E1"], "absent": []}));

    let req = test::TestRequest::get()
        .uri("/api/attendance/overview")
        .to_request();
    let overview: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(overview["date"], today);
    assert_eq!(overview["presentCount"], 1);
    assert_eq!(overview["unmarkedCount"], 1);
}

#[actix_web::test]
async fn failures_carry_their_kind() {
    let f = fixture();
    let app = app!(f.service.clone());

    let resp = test::call_service(&app, mark("E9", "2024-01-10", true).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNKNOWN_EMPLOYEE");

    let resp = test::call_service(&app, mark("E1", "2024-13-01", true).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_DATE");

    let req = test::TestRequest::get()
        .uri("/api/attendance/summary?date=not-a-date")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(f.repo.is_empty().unwrap());
}

#[actix_web::test]
async fn unavailable_directory_maps_to_503() {
    let service: AttendanceService =
        common::stalled_service(Arc::new(InMemoryAttendanceRepository::new()));
    let app = app!(service);

    let resp = test::call_service(&app, mark("E1", "2024-01-10", true).to_request()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "STORE_UNAVAILABLE");
}

#[actix_web::test]
async fn overview_and_directory_endpoints() {
    let f = fixture();
    let app = app!(f.service.clone());

    test::call_service(&app, mark("E1", "2024-01-10", true).to_request()).await;

    let req = test::TestRequest::get()
        .uri("/api/attendance/overview?date=2024-01-10")
        .to_request();
    let overview: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(overview["totalEmployees"], 2);
    assert_eq!(overview["presentCount"], 1);
    assert_eq!(overview["unmarkedCount"], 1);
    assert_eq!(overview["attendanceRate"], 50.0);

    let req = test::TestRequest::get().uri("/api/employees").to_request();
    let employees: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(employees.as_array().map(Vec::len), Some(2));

    let req = test::TestRequest::get().uri("/api/employees/E2").to_request();
    let employee: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(employee["department"], "Sales");
    assert_eq!(employee["role"], "EMPLOYEE");

    let req = test::TestRequest::get().uri("/api/employees/E9").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
