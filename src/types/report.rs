use super::issues::{AnalyzerFindings, ComplexityReport, QualityIssue, SecurityIssue};
use super::record::AnalysisRecord;
use super::scoring::{Score, ScoreResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const QUALITY_ISSUE_PREVIEW: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub score: Score,
    pub analysis: AnalysisDetail,
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDetail {
    pub quality_issues: Vec<QualityIssue>,
    pub security_issues: Vec<SecurityIssue>,
    pub complexity: ComplexityReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_issues: usize,
    pub security_issues: usize,
    pub high_complexity_functions: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl AnalysisReport {
    pub fn new(findings: AnalyzerFindings, result: ScoreResult) -> Self {
        let summary = Summary {
            total_issues: findings.quality.len(),
            security_issues: findings.security.len(),
            high_complexity_functions: result.high_complexity_count,
            errors: result.error_count,
            warnings: result.warning_count,
        };

        let mut quality_issues = findings.quality;
        quality_issues.truncate(QUALITY_ISSUE_PREVIEW);

        Self {
            score: result.score,
            analysis: AnalysisDetail {
                quality_issues,
                security_issues: findings.security,
                complexity: findings.complexity,
            },
            summary,
        }
    }

    pub fn to_record(&self) -> AnalysisRecord {
        AnalysisRecord::new(
            self.score,
            self.summary.total_issues,
            self.summary.security_issues,
            self.summary.high_complexity_functions,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub total_analyses: usize,
    pub avg_score: f64,
    pub total_security_issues: usize,
    pub total_quality_issues: usize,
    pub total_complexity_issues: usize,
    pub trend_data: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub timestamp: DateTime<Utc>,
    pub score: Score,
    pub total_issues: usize,
    pub security_issues: usize,
    pub complexity_issues: usize,
}
