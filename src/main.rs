mod adapter;
mod cli;
mod config;
mod error;
mod pipeline;
mod report;
mod scoring;
mod stats;
mod store;
mod types;
mod upload;

use crate::error::CodescoreError;
use crate::store::{JsonlStore, RecordStore};
use crate::types::config::CodescoreConfig;
use clap::Parser;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_MIN_SCORE: i32 = 1;
    pub const REJECTED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_settings() -> Result<CodescoreConfig, CodescoreError> {
    let cwd = std::env::current_dir()?;
    match config::load_config(&cwd)? {
        Some(cfg) => Ok(cfg),
        None => {
            debug!(
                "no {} found in {}; using defaults",
                config::DEFAULT_CONFIG_FILE,
                cwd.display()
            );
            Ok(CodescoreConfig::default())
        }
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Sarif => report::OutputFormat::Sarif,
    }
}

fn read_capture(path: Option<&Path>) -> Result<Option<String>, CodescoreError> {
    path.map(|path| {
        if !path.exists() {
            return Err(CodescoreError::PathNotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    })
    .transpose()
}

fn run() -> Result<i32, CodescoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let settings = load_settings()?;
    let history = JsonlStore::new(cli.store.clone().unwrap_or_else(|| settings.store_path()));

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            upload::validate_upload(&cmd.path, &settings.upload_limits())?;

            let analyzers = adapter::Analyzers::new(settings.analyzer_settings());
            let store: Option<&dyn RecordStore> = if cmd.no_store {
                None
            } else {
                Some(&history)
            };
            let analysis = pipeline::Pipeline::new(analyzers, store).analyze(&cmd.path);

            let rendered = report::render(&analysis, output_format(&cmd.format))?;
            println!("{rendered}");

            match cmd.min_score {
                Some(min_score) if analysis.score < min_score => {
                    eprintln!(
                        "score {} is below the minimum of {}",
                        analysis.score, min_score
                    );
                    Ok(exit_code::BELOW_MIN_SCORE)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Score(cmd) => {
            let pylint = read_capture(cmd.pylint.as_deref())?;
            let bandit = read_capture(cmd.bandit.as_deref())?;
            let radon = read_capture(cmd.radon.as_deref())?;
            let analysis =
                pipeline::rescore(pylint.as_deref(), bandit.as_deref(), radon.as_deref());

            let rendered = report::render(&analysis, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Stats(cmd) => {
            let window = settings.stats_settings().trend_window;
            let summary = stats::from_store(&history, window)?;
            let format = match cmd.format {
                cli::StatsFormat::Json => report::OutputFormat::Json,
                cli::StatsFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render_stats(&summary, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cmd) => {
            let limit = cmd
                .limit
                .unwrap_or_else(|| settings.stats_settings().history_limit);
            let recent = history.recent(limit)?;
            println!("{}", report::json::to_json(&recent)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Health => {
            let health = serde_json::json!({
                "status": "healthy",
                "service": "codescore",
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "history": history.path().display().to_string(),
                "recorded_analyses": history.count()?,
            });
            println!("{}", report::json::to_json(&health)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                CodescoreError::PathNotFound(_) | CodescoreError::Rejected(_) => {
                    exit_code::REJECTED
                }
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
