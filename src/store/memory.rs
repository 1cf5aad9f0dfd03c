use super::RecordStore;
use crate::error::{CodescoreError, Result};
use crate::types::record::AnalysisRecord;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<AnalysisRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, record: &AnalysisRecord) -> Result<()> {
        self.records
            .lock()
            .map_err(|_| CodescoreError::Store("memory store lock poisoned".to_string()))?
            .push(record.clone());
        Ok(())
    }

    fn all(&self) -> Result<Vec<AnalysisRecord>> {
        Ok(self
            .records
            .lock()
            .map_err(|_| CodescoreError::Store("memory store lock poisoned".to_string()))?
            .clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_appends_in_order() {
        let store = MemoryStore::new();
        store
            .append(&AnalysisRecord::new(80, 1, 0, 0))
            .expect("append should succeed");
        store
            .append(&AnalysisRecord::new(90, 0, 0, 0))
            .expect("append should succeed");

        assert_eq!(store.count().expect("count should succeed"), 2);
        let all = store.all().expect("all should succeed");
        assert_eq!(all[0].score, 80);
        assert_eq!(all[1].score, 90);
    }
}
