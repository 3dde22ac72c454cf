#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hrm_attendance::directory::{
    CachedEmployeeDirectory, EmployeeDirectory, InMemoryEmployeeDirectory,
};
use hrm_attendance::model::{Employee, EmployeeId, Role};
use hrm_attendance::store::{AttendanceStore, InMemoryAttendanceRepository};
use hrm_attendance::{AttendanceResult, AttendanceService};

pub fn employee(id: &str, department: &str) -> Employee {
    Employee {
        id: EmployeeId::from(id),
        name: format!("Employee {id}"),
        department: department.to_string(),
        email: format!("{}@company.com", id.to_lowercase()),
        role: Role::Employee,
    }
}

pub struct Fixture {
    pub service: AttendanceService,
    pub repo: Arc<InMemoryAttendanceRepository>,
    pub directory: Arc<InMemoryEmployeeDirectory>,
}

/// Directory with `E1` (Engineering) and `E2` (Sales).
pub fn fixture() -> Fixture {
    let directory = Arc::new(InMemoryEmployeeDirectory::new([
        employee("E1", "Engineering"),
        employee("E2", "Sales"),
    ]));
    let repo = Arc::new(InMemoryAttendanceRepository::new());
    let store = AttendanceStore::new(repo.clone(), directory.clone(), Duration::from_secs(2));
    Fixture {
        service: AttendanceService::new(store),
        repo,
        directory,
    }
}

/// Same directory as `fixture`, with resolution served through a warm lookup cache.
pub fn cached_fixture() -> Fixture {
    let directory = Arc::new(InMemoryEmployeeDirectory::new([
        employee("E1", "Engineering"),
        employee("E2", "Sales"),
    ]));
    let repo = Arc::new(InMemoryAttendanceRepository::new());
    let lookups = Arc::new(CachedEmployeeDirectory::new(
        directory.clone(),
        100,
        Duration::from_secs(300),
    ));
    let store = AttendanceStore::new(repo.clone(), directory.clone(), Duration::from_secs(2))
        .with_lookup_cache(lookups);
    Fixture {
        service: AttendanceService::new(store),
        repo,
        directory,
    }
}

/// Directory that never answers within any reasonable bound.
pub struct StalledDirectory;

#[async_trait]
impl EmployeeDirectory for StalledDirectory {
    async fn resolve(&self, _id: &EmployeeId) -> AttendanceResult<Option<Employee>> {
        actix_web::rt::time::sleep(Duration::from_secs(30)).await;
        Ok(None)
    }

    async fn list(&self) -> AttendanceResult<Vec<Employee>> {
        actix_web::rt::time::sleep(Duration::from_secs(30)).await;
        Ok(Vec::new())
    }
}

pub fn stalled_service(repo: Arc<InMemoryAttendanceRepository>) -> AttendanceService {
    let store = AttendanceStore::new(repo, Arc::new(StalledDirectory), Duration::from_millis(50));
    AttendanceService::new(store)
}

pub fn id(raw: &str) -> EmployeeId {
    EmployeeId::from(raw)
}
