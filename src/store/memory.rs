use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::AttendanceRepository;
use crate::error::{AttendanceError, AttendanceResult};
use crate::model::{AttendanceRecord, EmployeeId};

type Days = BTreeMap<NaiveDate, bool>;
type Shard = Arc<RwLock<Days>>;

/// Process-local attendance table, sharded per employee.
///
/// The outer lock only guards the shard index. Writes to different employees lock different
/// shards, so they never wait on each other. Date-wide reads hold the index and every shard
/// together, so they observe either all of a write or none of it.
#[derive(Default)]
pub struct InMemoryAttendanceRepository {
    shards: RwLock<BTreeMap<EmployeeId, Shard>>,
}

impl InMemoryAttendanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored records across all keys.
    pub fn len(&self) -> AttendanceResult<usize> {
        let shards = self.shards.read().map_err(|_| poisoned())?;
        let mut total = 0;
        for days in shards.values() {
            total += days.read().map_err(|_| poisoned())?.len();
        }
        Ok(total)
    }

    pub fn is_empty(&self) -> AttendanceResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Shard of `employee_id`, created on first use.
    fn shard(&self, employee_id: &EmployeeId) -> AttendanceResult<Shard> {
        if let Some(days) = self.existing(employee_id)? {
            return Ok(days);
        }
        let mut shards = self.shards.write().map_err(|_| poisoned())?;
        Ok(shards.entry(employee_id.clone()).or_default().clone())
    }

    fn existing(&self, employee_id: &EmployeeId) -> AttendanceResult<Option<Shard>> {
        let shards = self.shards.read().map_err(|_| poisoned())?;
        Ok(shards.get(employee_id).cloned())
    }

    /// Marks on `date` for every employee, read under one consistent view.
    fn marks_on(&self, date: NaiveDate) -> AttendanceResult<Vec<(EmployeeId, bool)>> {
        let shards = self.shards.read().map_err(|_| poisoned())?;
        let guards = shards
            .iter()
            .map(|(id, days)| days.read().map(|days| (id, days)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| poisoned())?;
        let marks = guards
            .iter()
            .filter_map(|(id, days)| days.get(&date).map(|present| ((*id).clone(), *present)))
            .collect();
        Ok(marks)
    }
}

fn poisoned() -> AttendanceError {
    AttendanceError::StoreUnavailable("attendance table lock poisoned".to_string())
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendanceRepository {
    async fn upsert(&self, record: AttendanceRecord) -> AttendanceResult<AttendanceRecord> {
        let shard = self.shard(&record.employee_id)?;
        let mut days = shard.write().map_err(|_| poisoned())?;
        days.insert(record.date, record.present);
        Ok(record)
    }

    async fn history(&self, employee_id: &EmployeeId) -> AttendanceResult<Vec<AttendanceRecord>> {
        let Some(shard) = self.existing(employee_id)? else {
            return Ok(Vec::new());
        };
        let days = shard.read().map_err(|_| poisoned())?;
        Ok(days
            .iter()
            .rev()
            .map(|(date, present)| AttendanceRecord::new(employee_id.clone(), *date, *present))
            .collect())
    }

    async fn find(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
    ) -> AttendanceResult<Option<AttendanceRecord>> {
        let Some(shard) = self.existing(employee_id)? else {
            return Ok(None);
        };
        let days = shard.read().map_err(|_| poisoned())?;
        Ok(days
            .get(&date)
            .map(|present| AttendanceRecord::new(employee_id.clone(), date, *present)))
    }

    async fn records_on(&self, date: NaiveDate) -> AttendanceResult<Vec<AttendanceRecord>> {
        Ok(self
            .marks_on(date)?
            .into_iter()
            .map(|(id, present)| AttendanceRecord::new(id, date, present))
            .collect())
    }

    async fn count_on(&self, date: NaiveDate) -> AttendanceResult<usize> {
        Ok(self.marks_on(date)?.len())
    }
}
