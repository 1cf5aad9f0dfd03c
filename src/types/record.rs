use super::scoring::Score;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub score: Score,
    pub total_issues: usize,
    pub security_issues: usize,
    pub complexity_issues: usize,
}

impl AnalysisRecord {
    pub fn new(
        score: Score,
        total_issues: usize,
        security_issues: usize,
        complexity_issues: usize,
    ) -> Self {
        Self::at(
            Utc::now(),
            score,
            total_issues,
            security_issues,
            complexity_issues,
        )
    }

    pub fn at(
        timestamp: DateTime<Utc>,
        score: Score,
        total_issues: usize,
        security_issues: usize,
        complexity_issues: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            score,
            total_issues,
            security_issues,
            complexity_issues,
        }
    }
}
