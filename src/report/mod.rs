pub mod json;
pub mod md;
pub mod sarif;

use crate::error::CodescoreError;
use crate::types::report::{AnalysisReport, StatsReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String, CodescoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CodescoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(CodescoreError::Json),
    }
}

pub fn render_stats(stats: &StatsReport, format: OutputFormat) -> Result<String, CodescoreError> {
    match format {
        OutputFormat::Md => Ok(md::stats_to_markdown(stats)),
        OutputFormat::Json | OutputFormat::Sarif => {
            json::to_json(stats).map_err(CodescoreError::Json)
        }
    }
}
