use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::issues::{AnalyzerFindings, IssueKind, QualityIssue};
    use crate::types::report::AnalysisReport;
    use crate::types::scoring::ScoreResult;

    #[test]
    fn json_report_has_score_analysis_and_summary() {
        let findings = AnalyzerFindings {
            quality: vec![QualityIssue::new(IssueKind::Error, "boom")],
            ..AnalyzerFindings::default()
        };
        let result = ScoreResult {
            score: 97,
            error_count: 1,
            warning_count: 0,
            security_count: 0,
            high_complexity_count: 0,
        };

        let rendered = to_json(&AnalysisReport::new(findings, result)).expect("json should serialize");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("rendered json should parse");
        assert_eq!(value["score"], 97);
        assert_eq!(value["analysis"]["quality_issues"][0]["type"], "error");
        assert!(value["analysis"]["security_issues"].as_array().is_some());
        assert!(value["analysis"]["complexity"].as_object().is_some());
        assert_eq!(value["summary"]["total_issues"], 1);
        assert_eq!(value["summary"]["high_complexity_functions"], 0);
        assert!(value.get("filename").is_none());
    }
}
