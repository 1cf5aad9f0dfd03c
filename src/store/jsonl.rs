use super::RecordStore;
use crate::error::{CodescoreError, Result};
use crate::types::record::AnalysisRecord;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonlStore {
    fn append(&self, record: &AnalysisRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CodescoreError::Store(format!("{}: {}", self.path.display(), e)))?;
        // One write per record; appenders never interleave partial lines.
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn all(&self) -> Result<Vec<AnalysisRecord>> {
        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => {
                return Err(CodescoreError::Store(format!(
                    "{}: {}",
                    self.path.display(),
                    error
                )))
            }
        };

        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<AnalysisRecord>(&line) {
                Ok(record) => records.push(record),
                Err(error) => warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    %error,
                    "skipping unreadable history record"
                ),
            }
        }
        Ok(records)
    }
}
