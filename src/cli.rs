use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "codescore",
    version,
    about = "Static analysis quality scoring CLI for Python sources"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// History file to use instead of the configured one
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Analyze(AnalyzeCommand),
    Score(ScoreCommand),
    Stats(StatsCommand),
    History(HistoryCommand),
    Health,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    /// Do not record this analysis in the history
    #[arg(long)]
    pub no_store: bool,
    /// Exit with status 1 when the score falls below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// File holding `pylint --output-format=json` output
    #[arg(long)]
    pub pylint: Option<PathBuf>,
    /// File holding `bandit -f json` output
    #[arg(long)]
    pub bandit: Option<PathBuf>,
    /// File holding `radon cc -j` output
    #[arg(long)]
    pub radon: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct StatsCommand {
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: StatsFormat,
}

#[derive(Args)]
pub struct HistoryCommand {
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}

#[derive(Clone, ValueEnum)]
pub enum StatsFormat {
    Json,
    Md,
}
