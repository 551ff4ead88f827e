use std::path::PathBuf;

use clap::Parser;
use tempo_format::config::{Config, DEFAULT_LOG_FILTER};
use tempo_format::render::{RecordKind, load_input, render_json_str};

/// Render Tempo API records (JSON) as readable text.
#[derive(Parser)]
#[command(name = "tempo-format", version)]
struct Cli {
    /// workout-summary, workout-details, workout-lap, wellness,
    /// event-summary or event-details
    kind: RecordKind,
    /// JSON file holding one record or a list of records; stdin when omitted
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("tempo-format: log filter: {}", config.log_filter);

    let cli = Cli::parse();
    let input = load_input(cli.path.as_deref())?;
    let rendered = render_json_str(cli.kind, &input)?;
    println!("{rendered}");

    Ok(())
}
