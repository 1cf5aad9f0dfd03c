use serde::Serialize;

pub type Score = u8;

pub const MAX_SCORE: Score = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: Score,
    pub error_count: usize,
    pub warning_count: usize,
    pub security_count: usize,
    pub high_complexity_count: usize,
}

impl ScoreResult {
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
            && self.warning_count == 0
            && self.security_count == 0
            && self.high_complexity_count == 0
    }
}
