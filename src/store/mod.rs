pub mod jsonl;
#[cfg(test)]
pub mod memory;

use crate::error::Result;
use crate::types::record::AnalysisRecord;

pub use jsonl::JsonlStore;
#[cfg(test)]
pub use memory::MemoryStore;

pub trait RecordStore {
    fn append(&self, record: &AnalysisRecord) -> Result<()>;

    fn all(&self) -> Result<Vec<AnalysisRecord>>;

    fn count(&self) -> Result<usize> {
        Ok(self.all()?.len())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>> {
        Ok(newest_first(self.all()?, limit))
    }
}

// Ties on timestamp keep the later-stored record first.
pub(crate) fn newest_first(mut records: Vec<AnalysisRecord>, limit: usize) -> Vec<AnalysisRecord> {
    records.reverse();
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    records.truncate(limit);
    records
}
