use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use super::EmployeeDirectory;
use crate::error::AttendanceResult;
use crate::model::{Employee, EmployeeId};

/// Caches positive `resolve` results in front of another directory.
///
/// Misses are not cached, so a newly added employee resolves immediately. `list` always goes to
/// the inner directory and evicts cached ids it no longer returns.
pub struct CachedEmployeeDirectory {
    inner: Arc<dyn EmployeeDirectory>,
    cache: Cache<EmployeeId, Employee>,
}

impl CachedEmployeeDirectory {
    pub fn new(inner: Arc<dyn EmployeeDirectory>, capacity: u64, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::builder()
                .max_capacity(capacity) // tune based on directory size
                .time_to_live(ttl)
                .build(),
        }
    }
}

#[async_trait]
impl EmployeeDirectory for CachedEmployeeDirectory {
    async fn resolve(&self, id: &EmployeeId) -> AttendanceResult<Option<Employee>> {
        if let Some(hit) = self.cache.get(id).await {
            return Ok(Some(hit));
        }

        let resolved = self.inner.resolve(id).await?;
        if let Some(employee) = &resolved {
            self.cache.insert(id.clone(), employee.clone()).await;
        }
        Ok(resolved)
    }

    async fn list(&self) -> AttendanceResult<Vec<Employee>> {
        let employees = self.inner.list().await?;
        let current: HashSet<EmployeeId> = employees.iter().map(|e| e.id.clone()).collect();
        let stale: Vec<EmployeeId> = self
            .cache
            .iter()
            .filter(|(id, _)| !current.contains(&**id))
            .map(|(id, _)| (*id).clone())
            .collect();
        for id in &stale {
            self.cache.invalidate(id).await;
        }

        let futures: Vec<_> = employees
            .iter()
            .map(|e| self.cache.insert(e.id.clone(), e.clone()))
            .collect();
        futures::future::join_all(futures).await;
        Ok(employees)
    }
}
