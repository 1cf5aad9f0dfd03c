use super::AdapterError;
use crate::types::issues::{Level, Location, SecurityIssue};
use serde_json::Value;

pub fn parse(output: &str) -> Result<Vec<SecurityIssue>, AdapterError> {
    let value: Value = serde_json::from_str(output)?;
    let report = value
        .as_object()
        .ok_or_else(|| AdapterError::Shape("bandit output is not a json object".to_string()))?;

    let Some(results) = report.get("results") else {
        return Ok(Vec::new());
    };
    let results = results
        .as_array()
        .ok_or_else(|| AdapterError::Shape("bandit results is not an array".to_string()))?;

    Ok(results.iter().filter_map(to_issue).collect())
}

fn to_issue(entry: &Value) -> Option<SecurityIssue> {
    let object = entry.as_object()?;
    let text = |key: &str| object.get(key).and_then(Value::as_str);

    let mut issue = SecurityIssue::new(
        Level::from_label(text("issue_severity")),
        Level::from_label(text("issue_confidence")),
    );
    issue.message = text("issue_text").unwrap_or_default().to_string();
    issue.test_id = text("test_id").map(str::to_string);
    issue.location = Location {
        line: object.get("line_number").and_then(Value::as_u64),
        column: object.get("col_offset").and_then(Value::as_u64),
    };
    Some(issue)
}
