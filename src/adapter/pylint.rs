use super::AdapterError;
use crate::types::issues::{IssueKind, Location, QualityIssue};
use serde_json::Value;
use tracing::debug;

pub fn parse(output: &str) -> Result<Vec<QualityIssue>, AdapterError> {
    let value: Value = serde_json::from_str(output)?;
    let entries = value
        .as_array()
        .ok_or_else(|| AdapterError::Shape("pylint output is not a json array".to_string()))?;

    Ok(entries
        .iter()
        .filter_map(|entry| {
            let issue = to_issue(entry);
            if issue.is_none() {
                debug!(%entry, "skipping non-object pylint entry");
            }
            issue
        })
        .collect())
}

fn to_issue(entry: &Value) -> Option<QualityIssue> {
    let object = entry.as_object()?;
    let text = |key: &str| object.get(key).and_then(Value::as_str);

    let mut issue = QualityIssue::new(
        IssueKind::from_label(text("type")),
        text("message").unwrap_or_default(),
    );
    issue.symbol = text("symbol").map(str::to_string);
    issue.message_id = text("message-id").map(str::to_string);
    issue.location = Location {
        line: object.get("line").and_then(Value::as_u64),
        column: object.get("column").and_then(Value::as_u64),
    };
    Some(issue)
}
