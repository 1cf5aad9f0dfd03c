use crate::types::issues::{IssueKind, QualityIssue};

pub const ERROR_PENALTY: i64 = 3;
pub const WARNING_PENALTY: i64 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualityCounts {
    pub errors: usize,
    pub warnings: usize,
}

impl QualityCounts {
    pub fn penalty(&self) -> i64 {
        self.errors as i64 * ERROR_PENALTY + self.warnings as i64 * WARNING_PENALTY
    }
}

pub fn classify(issues: &[QualityIssue]) -> QualityCounts {
    issues
        .iter()
        .fold(QualityCounts::default(), |mut counts, issue| {
            if issue.kind.is_error() {
                counts.errors += 1;
            } else if issue.kind == IssueKind::Warning {
                counts.warnings += 1;
            }
            counts
        })
}
