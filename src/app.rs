use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::{Config, StoreBackend};
use crate::db::{ensure_schema, init_db};
use crate::directory::{
    CachedEmployeeDirectory, EmployeeDirectory, InMemoryEmployeeDirectory, MySqlEmployeeDirectory,
};
use crate::service::AttendanceService;
use crate::store::{
    AttendanceRepository, AttendanceStore, InMemoryAttendanceRepository, MySqlAttendanceRepository,
};

/// Wires repository, directory and store for the configured backend.
pub async fn build_service(config: &Config) -> Result<AttendanceService> {
    let (repo, directory): (Arc<dyn AttendanceRepository>, Arc<dyn EmployeeDirectory>) =
        match config.store_backend {
            StoreBackend::Mysql => {
                let url = config
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL must be set when STORE_BACKEND=mysql")?;
                let pool = init_db(url, config.store_timeout)
                    .await
                    .context("Failed to connect to database")?;
                ensure_schema(&pool).await.context("Failed to prepare schema")?;
                let repo: Arc<dyn AttendanceRepository> =
                    Arc::new(MySqlAttendanceRepository::new(pool.clone()));
                let directory: Arc<dyn EmployeeDirectory> =
                    Arc::new(MySqlEmployeeDirectory::new(pool));
                (repo, directory)
            }
            StoreBackend::Memory => {
                let directory = match &config.employee_seed_file {
                    Some(path) => InMemoryEmployeeDirectory::from_json_file(path)?,
                    None => {
                        warn!("No EMPLOYEE_SEED_FILE set, employee directory starts empty");
                        InMemoryEmployeeDirectory::default()
                    }
                };
                let repo: Arc<dyn AttendanceRepository> =
                    Arc::new(InMemoryAttendanceRepository::new());
                let directory: Arc<dyn EmployeeDirectory> = Arc::new(directory);
                (repo, directory)
            }
        };

    let lookups = Arc::new(CachedEmployeeDirectory::new(
        directory.clone(),
        config.directory_cache_capacity,
        config.directory_cache_ttl,
    ));

    info!(backend = %config.store_backend, "Attendance store ready");
    let store =
        AttendanceStore::new(repo, directory, config.store_timeout).with_lookup_cache(lookups);
    Ok(AttendanceService::new(store))
}
