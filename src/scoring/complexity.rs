use crate::types::issues::ComplexityReport;

pub const HIGH_COMPLEXITY: i64 = 10;
pub const VERY_HIGH_COMPLEXITY: i64 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexityTally {
    pub penalty: i64,
    pub high_complexity: usize,
}

pub fn tally(report: &ComplexityReport) -> ComplexityTally {
    report
        .values()
        .flatten()
        .fold(ComplexityTally::default(), |mut tally, function| {
            if function.complexity > VERY_HIGH_COMPLEXITY {
                tally.penalty += 5;
                tally.high_complexity += 1;
            } else if function.complexity > HIGH_COMPLEXITY {
                tally.penalty += 2;
                tally.high_complexity += 1;
            }
            tally
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::issues::FunctionComplexity;

    #[test]
    fn tally_counts_functions_across_all_files() {
        let mut report = ComplexityReport::new();
        report.insert(
            "a.py".to_string(),
            vec![
                FunctionComplexity::new("flat", 10),
                FunctionComplexity::new("branchy", 11),
            ],
        );
        report.insert(
            "b.py".to_string(),
            vec![
                FunctionComplexity::new("tangled", 16),
                FunctionComplexity::new("edge", 15),
            ],
        );

        let tally = tally(&report);
        assert_eq!(tally.high_complexity, 3);
        assert_eq!(tally.penalty, 2 + 5 + 2);
    }
}
