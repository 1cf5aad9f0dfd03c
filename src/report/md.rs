use crate::types::report::{AnalysisReport, StatsReport};

pub fn to_markdown(report: &AnalysisReport) -> String {
    let mut output = String::new();
    output.push_str("# Code Quality Report\n\n");
    output.push_str(&format!("Score: {}/100\n\n", report.score));
    output.push_str("## Summary\n\n");
    output.push_str(&format!(
        "- quality issues: {} ({} errors, {} warnings)\n- security issues: {}\n- high complexity functions: {}\n\n",
        report.summary.total_issues,
        report.summary.errors,
        report.summary.warnings,
        report.summary.security_issues,
        report.summary.high_complexity_functions
    ));

    output.push_str("## Quality Issues\n\n");
    if report.analysis.quality_issues.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for issue in &report.analysis.quality_issues {
            let line = issue
                .location
                .line
                .map(|line| format!(" (line {line})"))
                .unwrap_or_default();
            output.push_str(&format!(
                "- [{}] {}{}\n",
                issue.kind.as_str(),
                issue.message,
                line
            ));
        }
        let hidden = report
            .summary
            .total_issues
            .saturating_sub(report.analysis.quality_issues.len());
        if hidden > 0 {
            output.push_str(&format!("- ... and {hidden} more\n"));
        }
        output.push('\n');
    }

    output.push_str("## Security Issues\n\n");
    if report.analysis.security_issues.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for issue in &report.analysis.security_issues {
            output.push_str(&format!(
                "- [{}/{}] {}: {}\n",
                issue.severity.as_str(),
                issue.confidence.as_str(),
                issue.test_id.as_deref().unwrap_or("security"),
                issue.message
            ));
        }
        output.push('\n');
    }

    output.push_str("## Complexity\n\n");
    let functions = report
        .analysis
        .complexity
        .values()
        .flatten()
        .collect::<Vec<_>>();
    if functions.is_empty() {
        output.push_str("- none\n");
    } else {
        for function in functions {
            output.push_str(&format!("- {}: {}\n", function.name, function.complexity));
        }
    }

    output
}

pub fn stats_to_markdown(stats: &StatsReport) -> String {
    let mut output = String::new();
    output.push_str("# Analysis Statistics\n\n");
    output.push_str(&format!(
        "- total analyses: {}\n- average score: {:.1}\n- security issues: {}\n- quality issues: {}\n- high complexity functions: {}\n\n",
        stats.total_analyses,
        stats.avg_score,
        stats.total_security_issues,
        stats.total_quality_issues,
        stats.total_complexity_issues
    ));

    output.push_str("## Trend\n\n");
    if stats.trend_data.is_empty() {
        output.push_str("- no analyses recorded yet\n");
    } else {
        output.push_str("| # | When | Score | Quality | Security | Complexity |\n");
        output.push_str("|---|---|---|---|---|---|\n");
        for point in &stats.trend_data {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                point.label,
                point.timestamp.format("%Y-%m-%d %H:%M"),
                point.score,
                point.total_issues,
                point.security_issues,
                point.complexity_issues
            ));
        }
    }

    output
}
