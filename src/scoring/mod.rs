pub mod complexity;
pub mod quality;
pub mod security;

use crate::types::issues::{ComplexityReport, QualityIssue, SecurityIssue};
use crate::types::scoring::{Score, ScoreResult, MAX_SCORE};

/// Folds the three analyzer channels into one bounded score.
///
/// Starts at 100, subtracts every quality, security and complexity penalty,
/// clamps to `[0, 100]`, then forces 100 when nothing was counted at all.
/// Penalties are purely additive, so input order never matters.
pub fn score(
    quality_issues: &[QualityIssue],
    security_issues: &[SecurityIssue],
    complexity_report: &ComplexityReport,
) -> ScoreResult {
    let quality = quality::classify(quality_issues);
    let complexity = complexity::tally(complexity_report);

    let raw = i64::from(MAX_SCORE)
        - quality.penalty()
        - security::total_penalty(security_issues)
        - complexity.penalty;

    let mut result = ScoreResult {
        score: raw.clamp(0, i64::from(MAX_SCORE)) as Score,
        error_count: quality.errors,
        warning_count: quality.warnings,
        security_count: security_issues.len(),
        high_complexity_count: complexity.high_complexity,
    };

    // Applied after the clamp, independently of it.
    if result.is_clean() {
        result.score = MAX_SCORE;
    }

    result
}
