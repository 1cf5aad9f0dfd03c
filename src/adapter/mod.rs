pub mod bandit;
pub mod process;
pub mod pylint;
pub mod radon;

use crate::types::config::AnalyzerSettings;
use crate::types::issues::AnalyzerFindings;
use std::path::Path;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("{0}: no command configured")]
    EmptyCommand(String),

    #[error("{tool}: failed to start: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool}: failed while waiting: {source}")]
    Wait {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool}: timed out after {timeout:?}")]
    Timeout { tool: String, timeout: Duration },

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected output shape: {0}")]
    Shape(String),
}

#[derive(Debug, Clone)]
pub struct Analyzers {
    settings: AnalyzerSettings,
}

impl Analyzers {
    pub fn new(settings: AnalyzerSettings) -> Self {
        Self { settings }
    }

    pub fn run(&self, artifact: &Path) -> AnalyzerFindings {
        let timeout = self.settings.timeout;
        thread::scope(|scope| {
            let quality = scope.spawn(|| {
                collect(
                    "pylint",
                    &self.settings.pylint,
                    artifact,
                    timeout,
                    pylint::parse,
                )
            });
            let security = scope.spawn(|| {
                collect(
                    "bandit",
                    &self.settings.bandit,
                    artifact,
                    timeout,
                    bandit::parse,
                )
            });
            let complexity = scope.spawn(|| {
                collect(
                    "radon",
                    &self.settings.radon,
                    artifact,
                    timeout,
                    radon::parse,
                )
            });

            let findings = AnalyzerFindings {
                quality: join_or_default("pylint", quality.join()),
                security: join_or_default("bandit", security.join()),
                complexity: join_or_default("radon", complexity.join()),
            };
            info!(
                quality = findings.quality.len(),
                security = findings.security.len(),
                complexity_files = findings.complexity.len(),
                "analyzers finished"
            );
            findings
        })
    }
}

fn collect<T: Default>(
    tool: &str,
    command: &[String],
    artifact: &Path,
    timeout: Duration,
    parse: fn(&str) -> Result<T, AdapterError>,
) -> T {
    let run = match process::run_tool(tool, command, artifact, timeout) {
        Ok(run) => run,
        Err(error) => {
            warn!(tool, %error, "analyzer failed; treating as no findings");
            return T::default();
        }
    };

    if run.stdout.trim().is_empty() {
        debug!(tool, stderr = %run.stderr.trim(), "analyzer produced no output");
        return T::default();
    }

    parse_or_default(tool, &run.stdout, parse)
}

pub fn parse_or_default<T: Default>(
    tool: &str,
    output: &str,
    parse: fn(&str) -> Result<T, AdapterError>,
) -> T {
    if output.trim().is_empty() {
        return T::default();
    }
    parse(output).unwrap_or_else(|error| {
        warn!(tool, %error, "analyzer output unusable; treating as no findings");
        T::default()
    })
}

fn join_or_default<T: Default>(tool: &str, joined: thread::Result<T>) -> T {
    joined.unwrap_or_else(|_| {
        warn!(tool, "analyzer worker panicked; treating as no findings");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::AnalyzerSettings;

    fn missing_settings() -> AnalyzerSettings {
        AnalyzerSettings {
            timeout: Duration::from_secs(5),
            pylint: vec!["codescore-missing-pylint".to_string()],
            bandit: vec!["codescore-missing-bandit".to_string()],
            radon: Vec::new(),
        }
    }

    #[test]
    fn missing_tools_degrade_to_empty_findings() {
        let findings = Analyzers::new(missing_settings()).run(Path::new("sample.py"));
        assert_eq!(findings, AnalyzerFindings::default());
    }

    #[test]
    fn parse_or_default_swallows_malformed_output() {
        let issues = parse_or_default("pylint", "Traceback (most recent call last):", pylint::parse);
        assert!(issues.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn one_failing_tool_does_not_affect_the_others() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        let pylint = dir.path().join("pylint.sh");
        std::fs::write(
            &pylint,
            "cat <<'EOF'\n[{\"type\": \"error\", \"message\": \"boom\", \"line\": 1}]\nEOF\n",
        )
        .expect("pylint script should write");
        let radon = dir.path().join("radon.sh");
        std::fs::write(&radon, "exec sleep 5\n").expect("radon script should write");

        let settings = AnalyzerSettings {
            timeout: Duration::from_secs(1),
            pylint: vec![
                "sh".to_string(),
                pylint.to_string_lossy().into_owned(),
                "{path}".to_string(),
            ],
            bandit: vec!["codescore-missing-bandit".to_string()],
            radon: vec![
                "sh".to_string(),
                radon.to_string_lossy().into_owned(),
                "{path}".to_string(),
            ],
        };

        let findings = Analyzers::new(settings).run(Path::new("sample.py"));
        assert_eq!(findings.quality.len(), 1);
        assert!(findings.security.is_empty());
        assert!(findings.complexity.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn analyzers_run_concurrently() {
        let slow = |output: &str| {
            vec![
                "sh".to_string(),
                "-c".to_string(),
                format!("sleep 1; echo '{output}'"),
                "sh".to_string(),
                "{path}".to_string(),
            ]
        };
        let settings = AnalyzerSettings {
            timeout: Duration::from_secs(5),
            pylint: slow("[]"),
            bandit: slow(r#"{"results": []}"#),
            radon: slow("{}"),
        };

        let started = std::time::Instant::now();
        let findings = Analyzers::new(settings).run(Path::new("sample.py"));
        assert_eq!(findings, AnalyzerFindings::default());
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
