//! Fire datasource command line entry point.
//!
//! Initializes logging, loads configuration from the environment and runs a
//! single datasource operation, printing its result as JSON on stdout.

use anyhow::{Result, anyhow};
use chrono::Duration;
use clap::{Parser, Subcommand};
use futures::StreamExt;
use serde::Serialize;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use fire_datasource::core::LoggingConfig;
use fire_datasource::{Config, FireDataSource, HttpTransport, Query, QueryRequest, TimeRange};

#[derive(Parser)]
#[command(name = "fire-datasource", version, about = "Query the Fire profiling datasource")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the profile types the backend can serve
    ProfileTypes,

    /// List every series known to the backend
    Series,

    /// List all label names
    LabelNames,

    /// Run a single-target query over a recent time window
    Query {
        /// Profile type to query, e.g. process_cpu:cpu:nanoseconds:cpu:nanoseconds
        #[arg(long)]
        profile_type_id: String,

        /// Label selector restricting the queried series
        #[arg(long, default_value = "{}")]
        label_selector: String,

        /// Size of the time window in minutes, ending now
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
        since_minutes: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging first so configuration warnings are visible
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig::from_env().level);

    // Load configuration from environment
    let config = Config::from_env();

    info!("Using {}", config.transport.description());

    let datasource = FireDataSource::<HttpTransport>::from_config(&config)?;

    let output = match cli.command {
        Command::ProfileTypes => render(&datasource.profile_types().await?)?,
        Command::Series => render(&datasource.series().await?)?,
        Command::LabelNames => render(&datasource.label_names().await?)?,
        Command::Query {
            profile_type_id,
            label_selector,
            since_minutes,
        } => {
            let target = Query::new("A")
                .with_profile_type(profile_type_id)
                .with_label_selector(label_selector);
            let range = recent_range(since_minutes)?;

            let mut responses = datasource.query(QueryRequest::new(range, vec![target]));
            let mut rendered = Vec::new();
            while let Some(response) = responses.next().await {
                rendered.push(render(&response?)?);
            }
            rendered.join("\n")
        }
    };

    println!("{}", output);

    Ok(())
}

/// The window of `minutes` ending now.
fn recent_range(minutes: u32) -> Result<TimeRange> {
    Duration::try_minutes(i64::from(minutes))
        .and_then(TimeRange::last)
        .ok_or_else(|| anyhow!("time window of {} minutes is out of range", minutes))
}

/// Pretty-print a result as JSON.
fn render<T: Serialize>(value: &T) -> fire_datasource::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so stdout carries only the JSON output.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        let base = ["fire-datasource", "query", "--profile-type-id", "process_cpu"];
        Cli::try_parse_from(base.iter().chain(args).copied())
    }

    #[test]
    fn test_since_minutes_defaults_to_an_hour() {
        let cli = parse(&[]).unwrap();
        assert!(matches!(cli.command, Command::Query { since_minutes: 60, .. }));
    }

    #[test]
    fn test_since_minutes_rejects_negative_and_zero() {
        assert!(parse(&["--since-minutes", "-5"]).is_err());
        assert!(parse(&["--since-minutes", "0"]).is_err());
    }

    #[test]
    fn test_since_minutes_rejects_overflow() {
        assert!(parse(&["--since-minutes", "1000000000000"]).is_err());
    }

    #[test]
    fn test_recent_range_spans_requested_minutes() {
        let range = recent_range(u32::MAX).unwrap();
        assert_eq!(range.to - range.from, Duration::minutes(i64::from(u32::MAX)));
        assert!(range.from < range.to);
    }
}
