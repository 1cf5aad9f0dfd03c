use super::AdapterError;
use crate::types::issues::{ComplexityReport, FunctionComplexity};
use serde_json::Value;
use tracing::debug;

// File ids become `file-1`, `file-2`, ... so the report never carries the upload path.
pub fn parse(output: &str) -> Result<ComplexityReport, AdapterError> {
    let value: Value = serde_json::from_str(output)?;
    let files = value
        .as_object()
        .ok_or_else(|| AdapterError::Shape("radon output is not a json object".to_string()))?;

    let mut report = ComplexityReport::new();
    for (index, blocks) in files.values().enumerate() {
        let key = format!("file-{}", index + 1);
        let Some(blocks) = blocks.as_array() else {
            debug!(file = %key, "radon reported no block list for file");
            continue;
        };
        report.insert(key, blocks.iter().filter_map(to_function).collect());
    }
    Ok(report)
}

fn to_function(block: &Value) -> Option<FunctionComplexity> {
    let object = block.as_object()?;
    let complexity = object
        .get("complexity")
        .and_then(|value| value.as_i64().or_else(|| value.as_f64().map(|f| f as i64)))
        .unwrap_or(0);

    let name = object
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let mut function = FunctionComplexity::new(name, complexity);
    function.block_type = object
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string);
    function.lineno = object.get("lineno").and_then(Value::as_u64);
    Some(function)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_blocks_per_file() {
        let output = r#"{
            "sample.py": [
                {"type": "function", "rank": "C", "name": "tangled", "lineno": 1,
                 "col_offset": 0, "endline": 40, "complexity": 16, "closures": []},
                {"type": "class", "name": "Thing", "lineno": 42, "complexity": 3,
                 "methods": [{"type": "method", "name": "run", "complexity": 30}]},
                {"type": "function", "name": "nameless"}
            ]
        }"#;

        let report = parse(output).expect("radon output should parse");
        let blocks = &report["file-1"];
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].complexity, 16);
        assert_eq!(blocks[1].complexity, 3);
        assert_eq!(blocks[2].complexity, 0);
    }

    #[test]
    fn parse_rekeys_files_without_their_paths() {
        let output = r#"{"/tmp/uploads/secret_upload.py": [{"name": "f", "complexity": 12}]}"#;
        let report = parse(output).expect("radon output should parse");
        assert_eq!(report.keys().collect::<Vec<_>>(), vec!["file-1"]);
        assert_eq!(report["file-1"][0].complexity, 12);
    }

    #[test]
    fn parse_skips_files_radon_could_not_read() {
        let output = r#"{"broken.py": {"error": "invalid syntax (<unknown>, line 1)"}}"#;
        let report = parse(output).expect("radon output should parse");
        assert!(report.is_empty());
    }

    #[test]
    fn parse_rejects_array_output() {
        assert!(matches!(parse("[]"), Err(AdapterError::Shape(_))));
    }
}
