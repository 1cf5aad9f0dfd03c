use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Error,
    Fatal,
    Warning,
    Convention,
    Refactor,
    Info,
    Other(String),
}

impl IssueKind {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None => Self::Warning,
            Some("error") => Self::Error,
            Some("fatal") => Self::Fatal,
            Some("warning") => Self::Warning,
            Some("convention") => Self::Convention,
            Some("refactor") => Self::Refactor,
            Some("info") => Self::Info,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Warning => "warning",
            Self::Convention => "convention",
            Self::Refactor => "refactor",
            Self::Info => "info",
            Self::Other(label) => label,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error | Self::Fatal)
    }
}

impl Serialize for IssueKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    High,
    Undefined,
}

impl Level {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|value| value.trim().to_uppercase()) {
            None => Self::Low,
            Some(value) => match value.as_str() {
                "LOW" => Self::Low,
                "MEDIUM" => Self::Medium,
                "HIGH" => Self::High,
                _ => Self::Undefined,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Undefined => "UNDEFINED",
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Analyzer-reported paths are dropped so reports never name the uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(rename = "message-id", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(flatten)]
    pub location: Location,
}

impl QualityIssue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            symbol: None,
            message_id: None,
            location: Location::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityIssue {
    #[serde(rename = "issue_severity")]
    pub severity: Level,
    #[serde(rename = "issue_confidence")]
    pub confidence: Level,
    #[serde(rename = "issue_text")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(flatten)]
    pub location: Location,
}

impl SecurityIssue {
    pub fn new(severity: Level, confidence: Level) -> Self {
        Self {
            severity,
            confidence,
            message: String::new(),
            test_id: None,
            location: Location::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionComplexity {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u64>,
    pub complexity: i64,
}

impl FunctionComplexity {
    pub fn new(name: impl Into<String>, complexity: i64) -> Self {
        Self {
            name: name.into(),
            block_type: None,
            lineno: None,
            complexity,
        }
    }
}

pub type ComplexityReport = BTreeMap<String, Vec<FunctionComplexity>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerFindings {
    pub quality: Vec<QualityIssue>,
    pub security: Vec<SecurityIssue>,
    pub complexity: ComplexityReport,
}
