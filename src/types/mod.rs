pub mod config;
pub mod issues;
pub mod record;
pub mod report;
pub mod scoring;
