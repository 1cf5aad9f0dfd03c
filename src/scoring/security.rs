use crate::types::issues::{Level, SecurityIssue};

pub fn penalty(issue: &SecurityIssue) -> i64 {
    let confident = issue.confidence == Level::High;
    match issue.severity {
        Level::High => {
            if confident {
                8
            } else {
                5
            }
        }
        Level::Medium => {
            if confident {
                4
            } else {
                2
            }
        }
        Level::Low | Level::Undefined => 1,
    }
}

pub fn total_penalty(issues: &[SecurityIssue]) -> i64 {
    issues.iter().map(penalty).sum()
}
