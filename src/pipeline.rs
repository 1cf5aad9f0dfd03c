use crate::adapter::{self, Analyzers};
use crate::scoring;
use crate::store::RecordStore;
use crate::types::issues::AnalyzerFindings;
use crate::types::report::AnalysisReport;
use std::path::Path;
use tracing::{info, warn};

pub struct Pipeline<'a> {
    analyzers: Analyzers,
    store: Option<&'a dyn RecordStore>,
}

impl<'a> Pipeline<'a> {
    pub fn new(analyzers: Analyzers, store: Option<&'a dyn RecordStore>) -> Self {
        Self { analyzers, store }
    }

    pub fn analyze(&self, artifact: &Path) -> AnalysisReport {
        info!(artifact = %artifact.display(), "analysis started");
        let findings = self.analyzers.run(artifact);
        let report = build_report(findings);
        info!(score = report.score, "analysis scored");

        if let Some(store) = self.store {
            persist(store, &report);
        }
        report
    }
}

pub fn rescore(pylint: Option<&str>, bandit: Option<&str>, radon: Option<&str>) -> AnalysisReport {
    let findings = AnalyzerFindings {
        quality: pylint
            .map(|output| adapter::parse_or_default("pylint", output, adapter::pylint::parse))
            .unwrap_or_default(),
        security: bandit
            .map(|output| adapter::parse_or_default("bandit", output, adapter::bandit::parse))
            .unwrap_or_default(),
        complexity: radon
            .map(|output| adapter::parse_or_default("radon", output, adapter::radon::parse))
            .unwrap_or_default(),
    };
    build_report(findings)
}

fn build_report(findings: AnalyzerFindings) -> AnalysisReport {
    let result = scoring::score(&findings.quality, &findings.security, &findings.complexity);
    AnalysisReport::new(findings, result)
}

fn persist(store: &dyn RecordStore, report: &AnalysisReport) {
    let record = report.to_record();
    match store.append(&record) {
        Ok(()) => info!(record = %record.id, "analysis recorded"),
        Err(error) => warn!(%error, "failed to record analysis; report unaffected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodescoreError, Result};
    use crate::store::MemoryStore;
    use crate::types::config::AnalyzerSettings;
    use crate::types::record::AnalysisRecord;
    use std::time::Duration;

    struct FailingStore;

    impl RecordStore for FailingStore {
        fn append(&self, _record: &AnalysisRecord) -> Result<()> {
            Err(CodescoreError::Store("disk full".to_string()))
        }

        fn all(&self) -> Result<Vec<AnalysisRecord>> {
            Ok(Vec::new())
        }
    }

    fn offline_analyzers() -> Analyzers {
        Analyzers::new(AnalyzerSettings {
            timeout: Duration::from_secs(5),
            pylint: vec!["codescore-missing-pylint".to_string()],
            bandit: vec!["codescore-missing-bandit".to_string()],
            radon: vec!["codescore-missing-radon".to_string()],
        })
    }

    #[test]
    fn analyze_with_unavailable_tools_scores_100_and_records() {
        let store = MemoryStore::new();
        let pipeline = Pipeline::new(offline_analyzers(), Some(&store));

        let report = pipeline.analyze(Path::new("sample.py"));
        assert_eq!(report.score, 100);

        let records = store.all().expect("store should read");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].score, 100);
        assert_eq!(records[0].total_issues, 0);
    }

    #[test]
    fn persistence_failure_does_not_change_the_report() {
        let store = FailingStore;
        let pipeline = Pipeline::new(offline_analyzers(), Some(&store));
        let report = pipeline.analyze(Path::new("sample.py"));
        assert_eq!(report.score, 100);
    }

    #[test]
    fn rescore_combines_captured_outputs() {
        let report = rescore(
            Some(r#"[{"type": "error"}, {"type": "warning"}, {"type": "convention"}]"#),
            Some(r#"{"results": [{"issue_severity": "MEDIUM", "issue_confidence": "HIGH"}]}"#),
            Some(r#"{"a.py": [{"name": "f", "complexity": 12}]}"#),
        );
        assert_eq!(report.score, 100 - 3 - 1 - 4 - 2);
        assert_eq!(report.summary.total_issues, 3);
        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.warnings, 1);
        assert_eq!(report.summary.security_issues, 1);
        assert_eq!(report.summary.high_complexity_functions, 1);
    }

    #[test]
    fn rendered_report_never_names_the_uploaded_file() {
        let report = rescore(
            Some(r#"[{"type": "warning", "path": "uploads/secret_upload.py", "message": "w", "line": 3}]"#),
            Some(r#"{"results": [{"filename": "uploads/secret_upload.py", "issue_severity": "LOW"}]}"#),
            Some(r#"{"uploads/secret_upload.py": [{"name": "f", "complexity": 11}]}"#),
        );

        let rendered = crate::report::json::to_json(&report).expect("report should render");
        assert!(!rendered.contains("secret_upload"));
        assert_eq!(report.summary.total_issues, 1);
        assert_eq!(report.summary.security_issues, 1);
        assert_eq!(report.summary.high_complexity_functions, 1);
    }

    #[test]
    fn rescore_treats_garbage_as_no_findings() {
        let report = rescore(Some("*** pylint crashed ***"), None, Some(""));
        assert_eq!(report.score, 100);
        assert_eq!(report.summary.total_issues, 0);
    }
}
