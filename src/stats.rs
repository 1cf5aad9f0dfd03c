use crate::error::Result;
use crate::store::{newest_first, RecordStore};
use crate::types::record::AnalysisRecord;
use crate::types::report::{StatsReport, TrendPoint};

pub fn from_store(store: &dyn RecordStore, window: usize) -> Result<StatsReport> {
    Ok(aggregate(&store.all()?, window))
}

pub fn aggregate(records: &[AnalysisRecord], window: usize) -> StatsReport {
    let total_analyses = records.len();
    let score_sum: u64 = records.iter().map(|record| u64::from(record.score)).sum();
    let avg_score = if total_analyses == 0 {
        0.0
    } else {
        round_to_tenth(score_sum as f64 / total_analyses as f64)
    };

    let mut trend = newest_first(records.to_vec(), window);
    trend.reverse();

    StatsReport {
        total_analyses,
        avg_score,
        total_security_issues: records.iter().map(|record| record.security_issues).sum(),
        total_quality_issues: records.iter().map(|record| record.total_issues).sum(),
        total_complexity_issues: records.iter().map(|record| record.complexity_issues).sum(),
        trend_data: trend
            .into_iter()
            .enumerate()
            .map(|(index, record)| TrendPoint {
                label: format!("Analysis #{}", index + 1),
                timestamp: record.timestamp,
                score: record.score,
                total_issues: record.total_issues,
                security_issues: record.security_issues,
                complexity_issues: record.complexity_issues,
            })
            .collect(),
    }
}

// Halves go to the even neighbour: a mean of 90.25 reports 90.2.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
