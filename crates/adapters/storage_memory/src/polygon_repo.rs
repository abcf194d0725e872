//! In-memory implementation of [`PolygonRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use polystat_app::ports::PolygonRepository;
use polystat_domain::error::PolystatError;
use polystat_domain::id::PolygonKey;
use polystat_domain::record::PolygonRecord;

use crate::error::StorageError;

/// Entries in first-insertion order plus a key → position index.
#[derive(Debug, Default)]
struct OrderedStore {
    entries: Vec<(PolygonKey, Vec<PolygonRecord>)>,
    index: HashMap<PolygonKey, usize>,
}

impl OrderedStore {
    fn replace(&mut self, key: PolygonKey, records: Vec<PolygonRecord>) {
        if let Some(&position) = self.index.get(&key) {
            self.entries[position].1 = records;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, records));
        }
    }

    fn get(&self, key: &PolygonKey) -> Option<&Vec<PolygonRecord>> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }
}

/// Process-wide polygon store. Every instance is independent and starts
/// empty; its contents are dropped with it.
#[derive(Debug, Default)]
pub struct InMemoryPolygonRepository {
    store: Mutex<OrderedStore>,
}

impl InMemoryPolygonRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, OrderedStore>, StorageError> {
        self.store.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl PolygonRepository for InMemoryPolygonRepository {
    fn replace(
        &self,
        key: PolygonKey,
        records: Vec<PolygonRecord>,
    ) -> impl Future<Output = Result<(), PolystatError>> + Send {
        let result = self
            .lock()
            .map(|mut store| store.replace(key, records))
            .map_err(PolystatError::from);
        async { result }
    }

    fn get(
        &self,
        key: &PolygonKey,
    ) -> impl Future<Output = Result<Option<Vec<PolygonRecord>>, PolystatError>> + Send {
        let result = self
            .lock()
            .map(|store| store.get(key).cloned())
            .map_err(PolystatError::from);
        async { result }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<(PolygonKey, Vec<PolygonRecord>)>, PolystatError>> + Send
    {
        let result = self
            .lock()
            .map(|store| store.entries.clone())
            .map_err(PolystatError::from);
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, rtl_operating: i64) -> PolygonRecord {
        PolygonRecord {
            date: date.to_string(),
            rtl_operating: Some(rtl_operating),
            rtl_cancelled: Some(0),
            cfn_operating: Some(0),
            cfn_cancelled: Some(0),
            rtl_operating_routes: "N/A".to_string(),
            rtl_cancelled_routes: "N/A".to_string(),
            cfn_operating_routes: "N/A".to_string(),
            cfn_cancelled_routes: "N/A".to_string(),
        }
    }

    #[tokio::test]
    async fn should_start_empty() {
        let repo = InMemoryPolygonRepository::new();
        assert!(repo.get_all().await.unwrap().is_empty());
        assert!(repo.get(&PolygonKey::from("A")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_stored_records() {
        let repo = InMemoryPolygonRepository::new();
        repo.replace(PolygonKey::from("A"), vec![record("2024-01-01", 5)])
            .await
            .unwrap();

        let stored = repo.get(&PolygonKey::from("A")).await.unwrap().unwrap();
        assert_eq!(stored, vec![record("2024-01-01", 5)]);
    }

    #[tokio::test]
    async fn should_overwrite_records_when_key_reused() {
        let repo = InMemoryPolygonRepository::new();
        let key = PolygonKey::from("A");
        repo.replace(key.clone(), vec![record("2024-01-01", 5)])
            .await
            .unwrap();
        repo.replace(key.clone(), vec![record("2024-01-02", 9)])
            .await
            .unwrap();

        let stored = repo.get(&key).await.unwrap().unwrap();
        assert_eq!(stored, vec![record("2024-01-02", 9)]);
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_keep_first_insertion_position_when_overwritten() {
        let repo = InMemoryPolygonRepository::new();
        for key in ["b", "a", "c"] {
            repo.replace(PolygonKey::from(key), vec![record("d1", 1)])
                .await
                .unwrap();
        }
        repo.replace(PolygonKey::from("b"), vec![record("d2", 2)])
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        let keys: Vec<&str> = all.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(all[0].1, vec![record("d2", 2)]);
    }

    #[tokio::test]
    async fn should_isolate_separate_instances() {
        let first = InMemoryPolygonRepository::new();
        let second = InMemoryPolygonRepository::new();
        first
            .replace(PolygonKey::from("A"), vec![record("d", 1)])
            .await
            .unwrap();
        assert!(second.get(&PolygonKey::from("A")).await.unwrap().is_none());
    }
}
