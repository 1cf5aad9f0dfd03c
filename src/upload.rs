use crate::error::{CodescoreError, Result};
use crate::types::config::UploadLimits;
use std::path::Path;

pub fn validate_upload(path: &Path, limits: &UploadLimits) -> Result<()> {
    if !path.exists() {
        return Err(CodescoreError::PathNotFound(path.display().to_string()));
    }
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(CodescoreError::Rejected(format!(
            "not a regular file: {}",
            path.display()
        )));
    }

    if !has_allowed_extension(path, &limits.allowed_extensions) {
        return Err(CodescoreError::Rejected(format!(
            "unsupported file extension (allowed: {})",
            limits
                .allowed_extensions
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    if metadata.len() == 0 {
        return Err(CodescoreError::Rejected("file is empty".to_string()));
    }
    if metadata.len() > limits.max_file_size {
        return Err(CodescoreError::Rejected(format!(
            "file exceeds maximum size of {} bytes",
            limits.max_file_size
        )));
    }

    Ok(())
}

pub fn has_allowed_extension(path: &Path, allowed: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| allowed.iter().any(|candidate| *candidate == ext))
}
