use crate::error::CodescoreError;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const PATH_PLACEHOLDER: &str = "{path}";
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodescoreConfig {
    pub analyzers: Option<AnalyzersConfig>,
    pub storage: Option<StorageConfig>,
    pub upload: Option<UploadConfig>,
    pub stats: Option<StatsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzersConfig {
    pub timeout_secs: Option<u64>,
    pub pylint: Option<Vec<String>>,
    pub bandit: Option<Vec<String>>,
    pub radon: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub allowed_extensions: Option<Vec<String>>,
    pub max_file_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    pub trend_window: Option<usize>,
    pub history_limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerSettings {
    pub timeout: Duration,
    pub pylint: Vec<String>,
    pub bandit: Vec<String>,
    pub radon: Vec<String>,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            pylint: argv(&["pylint", PATH_PLACEHOLDER, "--output-format=json"]),
            bandit: argv(&["bandit", PATH_PLACEHOLDER, "-f", "json"]),
            radon: argv(&["radon", "cc", PATH_PLACEHOLDER, "-j"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadLimits {
    pub allowed_extensions: Vec<String>,
    pub max_file_size: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            allowed_extensions: vec!["py".to_string()],
            max_file_size: 5 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSettings {
    pub trend_window: usize,
    pub history_limit: usize,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            trend_window: 10,
            history_limit: 5,
        }
    }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

impl CodescoreConfig {
    pub const DEFAULT_STORE_PATH: &'static str = ".codescore/history.jsonl";

    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        let defaults = AnalyzerSettings::default();
        match &self.analyzers {
            Some(analyzers) => AnalyzerSettings {
                timeout: analyzers
                    .timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.timeout),
                pylint: analyzers.pylint.clone().unwrap_or(defaults.pylint),
                bandit: analyzers.bandit.clone().unwrap_or(defaults.bandit),
                radon: analyzers.radon.clone().unwrap_or(defaults.radon),
            },
            None => defaults,
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.storage
            .as_ref()
            .and_then(|storage| storage.path.as_deref())
            .map_or_else(|| PathBuf::from(Self::DEFAULT_STORE_PATH), PathBuf::from)
    }

    pub fn upload_limits(&self) -> UploadLimits {
        let defaults = UploadLimits::default();
        match &self.upload {
            Some(upload) => UploadLimits {
                allowed_extensions: upload
                    .allowed_extensions
                    .as_ref()
                    .map(|extensions| {
                        extensions
                            .iter()
                            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                            .collect()
                    })
                    .unwrap_or(defaults.allowed_extensions),
                max_file_size: upload.max_file_size.unwrap_or(defaults.max_file_size),
            },
            None => defaults,
        }
    }

    pub fn stats_settings(&self) -> StatsSettings {
        let defaults = StatsSettings::default();
        match &self.stats {
            Some(stats) => StatsSettings {
                trend_window: stats.trend_window.unwrap_or(defaults.trend_window),
                history_limit: stats.history_limit.unwrap_or(defaults.history_limit),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), CodescoreError> {
        if let Some(analyzers) = &self.analyzers {
            match analyzers.timeout_secs {
                Some(0) => {
                    return Err(CodescoreError::ConfigParse(
                        "analyzers.timeout_secs must be greater than 0".to_string(),
                    ))
                }
                Some(secs) if secs > MAX_TIMEOUT_SECS => {
                    return Err(CodescoreError::ConfigParse(format!(
                        "analyzers.timeout_secs must be at most {MAX_TIMEOUT_SECS}"
                    )))
                }
                _ => {}
            }
            for (name, command) in [
                ("pylint", &analyzers.pylint),
                ("bandit", &analyzers.bandit),
                ("radon", &analyzers.radon),
            ] {
                let Some(command) = command else {
                    continue;
                };
                if command.first().map_or(true, |program| program.trim().is_empty()) {
                    return Err(CodescoreError::ConfigParse(format!(
                        "analyzers.{name} must name a program to run"
                    )));
                }
            }
        }

        if let Some(storage) = &self.storage {
            if storage
                .path
                .as_ref()
                .is_some_and(|path| path.trim().is_empty())
            {
                return Err(CodescoreError::ConfigParse(
                    "storage.path cannot be empty".to_string(),
                ));
            }
        }

        if let Some(upload) = &self.upload {
            if let Some(extensions) = &upload.allowed_extensions {
                if extensions.is_empty() {
                    return Err(CodescoreError::ConfigParse(
                        "upload.allowed_extensions cannot be empty".to_string(),
                    ));
                }
                if extensions
                    .iter()
                    .any(|ext| ext.trim().trim_start_matches('.').is_empty())
                {
                    return Err(CodescoreError::ConfigParse(
                        "upload.allowed_extensions entries must be non-empty".to_string(),
                    ));
                }
            }
            if upload.max_file_size == Some(0) {
                return Err(CodescoreError::ConfigParse(
                    "upload.max_file_size must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(stats) = &self.stats {
            if stats.trend_window == Some(0) {
                return Err(CodescoreError::ConfigParse(
                    "stats.trend_window must be greater than 0".to_string(),
                ));
            }
            if stats.history_limit == Some(0) {
                return Err(CodescoreError::ConfigParse(
                    "stats.history_limit must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}
