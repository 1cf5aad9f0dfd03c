use crate::types::issues::{IssueKind, Level, Location, QualityIssue, SecurityIssue};
use crate::types::report::AnalysisReport;
use serde_json::{json, Value};

pub fn to_sarif(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    let results = report
        .analysis
        .quality_issues
        .iter()
        .map(quality_result)
        .chain(report.analysis.security_issues.iter().map(security_result))
        .collect::<Vec<_>>();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "codescore",
                    "version": env!("CARGO_PKG_VERSION")
                }
            },
            "artifacts": [{ "roles": ["analysisTarget"] }],
            "results": results,
            "properties": {
                "score": report.score,
                "summary": report.summary
            }
        }]
    });

    serde_json::to_string_pretty(&sarif)
}

fn quality_result(issue: &QualityIssue) -> Value {
    let level = if issue.kind.is_error() {
        "error"
    } else if issue.kind == IssueKind::Warning {
        "warning"
    } else {
        "note"
    };
    let rule_id = issue
        .message_id
        .as_deref()
        .or(issue.symbol.as_deref())
        .unwrap_or(issue.kind.as_str());
    json!({
        "ruleId": rule_id,
        "level": level,
        "message": { "text": issue.message },
        "locations": location(&issue.location),
    })
}

fn security_result(issue: &SecurityIssue) -> Value {
    let level = match issue.severity {
        Level::High => "error",
        Level::Medium => "warning",
        Level::Low | Level::Undefined => "note",
    };
    json!({
        "ruleId": issue.test_id.clone().unwrap_or_else(|| "security".to_string()),
        "level": level,
        "message": { "text": issue.message },
        "locations": location(&issue.location),
        "properties": { "confidence": issue.confidence },
    })
}

// The single analysis target is referenced by index; its path is never emitted.
fn location(location: &Location) -> Value {
    match location.line {
        Some(line) => json!([{
            "physicalLocation": {
                "artifactLocation": { "index": 0 },
                "region": { "startLine": line }
            }
        }]),
        None => json!([]),
    }
}
