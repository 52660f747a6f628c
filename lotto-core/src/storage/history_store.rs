use super::SlotStore;
use crate::error::Result;
use crate::types::{History, HistorySummary, ScanRecord};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Slot name the scan history is stored under.
pub const HISTORY_SLOT: &str = "scanHistory";

/// Persistence port for scan history, passed explicitly to whatever drives a
/// ticket check.
#[async_trait]
pub trait HistoryPort: Send + Sync {
    /// Current history. Missing or unreadable data yields an empty history.
    async fn load(&self) -> History;

    /// Record a scan as the newest entry and persist the capped history.
    async fn append(&self, record: ScanRecord) -> Result<()>;

    /// Drop the stored history entirely.
    async fn clear(&self) -> Result<()>;

    async fn summary(&self) -> HistorySummary {
        self.load().await.summary()
    }
}

/// Bounded scan history kept as one JSON array in a durable slot.
pub struct HistoryStore<S> {
    slots: S,
    key: String,
    // serializes read-modify-write so concurrent appends cannot drop records
    write_lock: Mutex<()>,
}

impl<S: SlotStore> HistoryStore<S> {
    pub fn new(slots: S) -> Self {
        Self::with_key(slots, HISTORY_SLOT)
    }

    pub fn with_key(slots: S, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Parse a stored slot value. `None` when it is not a valid history,
    /// including records whose numbers or match count are inconsistent.
    fn decode(raw: &str) -> Option<History> {
        let records = match serde_json::from_str::<Vec<ScanRecord>>(raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Stored scan history is corrupt: {}", e);
                return None;
            }
        };

        if let Some(bad) = records.iter().find(|r| !r.is_consistent()) {
            tracing::warn!("Stored scan {} is inconsistent, discarding history", bad.id);
            return None;
        }

        Some(History::from_records(records))
    }
}

#[async_trait]
impl<S: SlotStore> HistoryPort for HistoryStore<S> {
    async fn load(&self) -> History {
        match self.slots.get(&self.key).await {
            Ok(Some(raw)) => Self::decode(&raw).unwrap_or_default(),
            Ok(None) => History::new(),
            Err(e) => {
                tracing::warn!("Could not read scan history, starting empty: {}", e);
                History::new()
            }
        }
    }

    async fn append(&self, record: ScanRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        // A failed read is not an empty history: writing over it would drop
        // every stored record. Corrupt contents are unrecoverable and get
        // replaced.
        let mut history = match self.slots.get(&self.key).await? {
            Some(raw) => Self::decode(&raw).unwrap_or_default(),
            None => History::new(),
        };

        let record_id = record.id.clone();
        history.push_newest(record);

        let json = serde_json::to_string(&history)?;
        self.slots.put(&self.key, &json).await?;

        tracing::debug!(
            "Saved scan {} ({} entries in history)",
            record_id,
            history.len()
        );
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.slots.remove(&self.key).await?;

        tracing::info!("Cleared scan history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LottoError;
    use crate::storage::{MemorySlots, SqliteSlots};
    use crate::types::HISTORY_LIMIT;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct BrokenSlots;

    #[async_trait]
    impl SlotStore for BrokenSlots {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(LottoError::storage("disk unavailable"))
        }

        async fn put(&self, _key: &str, _value: &str) -> Result<()> {
            Err(LottoError::storage("disk full"))
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Err(LottoError::storage("disk unavailable"))
        }
    }

    /// Memory slots whose next read fails once `fail_next_read` is set.
    #[derive(Default)]
    struct FlakySlots {
        inner: MemorySlots,
        fail_next_read: AtomicBool,
    }

    #[async_trait]
    impl SlotStore for FlakySlots {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_next_read.swap(false, Ordering::SeqCst) {
                return Err(LottoError::storage("transient read failure"));
            }
            self.inner.get(key).await
        }

        async fn put(&self, key: &str, value: &str) -> Result<()> {
            self.inner.put(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key).await
        }
    }

    fn record(match_count: usize, is_winner: bool) -> ScanRecord {
        // scanned shares exactly `match_count` numbers with the draw
        let winning = vec![5, 12, 18, 23, 31, 38];
        let mut scanned = winning[..match_count].to_vec();
        scanned.extend([1, 2, 3, 4, 6, 7].into_iter().take(6 - match_count));
        scanned.sort_unstable();

        ScanRecord::new(
            "6-42",
            scanned,
            winning,
            match_count,
            if is_winner { "₱2,000.00" } else { "No Prize" },
            is_winner,
        )
    }

    #[tokio::test]
    async fn test_load_empty_when_absent() {
        let store = HistoryStore::new(MemorySlots::new());
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_round_trip() {
        let store = HistoryStore::new(MemorySlots::new());
        let scan = record(4, true);

        store.append(scan.clone()).await.unwrap();

        let history = store.load().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history.newest(), Some(&scan));
    }

    #[tokio::test]
    async fn test_keeps_most_recent_twenty() {
        let store = HistoryStore::new(MemorySlots::new());
        let mut ids = Vec::new();

        for i in 0..27 {
            let scan = record(i % 7, i % 2 == 0);
            ids.push(scan.id.clone());
            store.append(scan).await.unwrap();
        }

        let history = store.load().await;
        assert_eq!(history.len(), HISTORY_LIMIT);

        let expected: Vec<_> = ids.iter().rev().take(HISTORY_LIMIT).cloned().collect();
        let actual: Vec<_> = history.iter().map(|r| r.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = HistoryStore::new(MemorySlots::new());
        store.append(record(0, false)).await.unwrap();
        store.append(record(3, true)).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.load().await.is_empty());
        assert!(store.slots().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_slot_recovers_empty() {
        let store = HistoryStore::new(MemorySlots::with_value(HISTORY_SLOT, "{not json"));
        assert!(store.load().await.is_empty());

        let store = HistoryStore::new(MemorySlots::with_value(HISTORY_SLOT, r#"{"id": "x"}"#));
        assert!(store.load().await.is_empty());

        // appending over corrupt data starts a fresh history
        store.append(record(1, false)).await.unwrap();
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_inconsistent_records_are_treated_as_corrupt() {
        let mut unsorted = record(2, false);
        unsorted.scanned_numbers.reverse();

        let mut duplicated = record(2, false);
        duplicated.scanned_numbers[1] = duplicated.scanned_numbers[0];

        let mut wrong_count = record(2, false);
        wrong_count.match_count = 5;

        for bad in [unsorted, duplicated, wrong_count] {
            let raw = serde_json::to_string(&vec![record(1, false), bad]).unwrap();
            let store = HistoryStore::new(MemorySlots::with_value(HISTORY_SLOT, raw));
            assert!(store.load().await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_oversized_slot_is_truncated_on_load() {
        let records: Vec<_> = (0..30).map(|_| record(0, false)).collect();
        let raw = serde_json::to_string(&records).unwrap();
        let store = HistoryStore::new(MemorySlots::with_value(HISTORY_SLOT, raw));

        let history = store.load().await;
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.newest().unwrap().id, records[0].id);
    }

    #[tokio::test]
    async fn test_storage_failures() {
        let store = HistoryStore::new(BrokenSlots);

        assert!(store.load().await.is_empty());
        assert!(matches!(
            store.append(record(4, true)).await,
            Err(LottoError::Storage(_))
        ));
        assert!(store.clear().await.is_err());
    }

    #[tokio::test]
    async fn test_failed_read_does_not_overwrite_history() {
        let store = HistoryStore::new(FlakySlots::default());
        for _ in 0..19 {
            store.append(record(1, false)).await.unwrap();
        }

        store.slots().fail_next_read.store(true, Ordering::SeqCst);
        assert!(matches!(
            store.append(record(4, true)).await,
            Err(LottoError::Storage(_))
        ));
        assert_eq!(store.load().await.len(), 19);

        let last = record(3, true);
        store.append(last.clone()).await.unwrap();

        let history = store.load().await;
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.newest(), Some(&last));
    }

    #[tokio::test]
    async fn test_summary() {
        let store = HistoryStore::new(MemorySlots::new());
        store.append(record(4, true)).await.unwrap();
        store.append(record(1, false)).await.unwrap();
        store.append(record(0, false)).await.unwrap();

        let summary = store.summary().await;
        assert_eq!(summary.total, 3);
        assert_eq!(summary.winners, 1);
        assert_eq!(summary.non_winners, 2);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let store = Arc::new(HistoryStore::new(MemorySlots::new()));

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(record(i % 4, false)).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.load().await.len(), 10);
    }

    #[tokio::test]
    async fn test_sqlite_backed_history() {
        let store = HistoryStore::new(SqliteSlots::in_memory().await.unwrap());
        let scan = record(4, true);

        store.append(scan.clone()).await.unwrap();
        assert_eq!(store.load().await.newest(), Some(&scan));

        store.clear().await.unwrap();
        assert!(store.load().await.is_empty());
    }
}
