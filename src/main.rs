use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use xhttp_filter::config::{load_sources_file, resolve_sources};
use xhttp_filter::{run, write_output, Config, DEFAULT_OUTPUT};

/// Extract xhttp VLESS links from subscription feeds into one file.
#[derive(Parser, Debug)]
#[command(name = "xhttp-filter", version)]
struct Cli {
    /// Subscription URLs or local files, processed in order
    sources: Vec<String>,

    /// File listing one source per line (`#` starts a comment)
    #[arg(short = 'f', long, env = "XHTTP_SOURCES_FILE")]
    sources_file: Option<PathBuf>,

    /// Output file, overwritten on every run
    #[arg(short, long, env = "XHTTP_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Per-request timeout in seconds (unbounded when omitted)
    #[arg(long, env = "XHTTP_TIMEOUT")]
    timeout: Option<u64>,

    /// Create the output directory if it does not exist
    #[arg(long)]
    create_parent: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let from_file = cli
        .sources_file
        .as_deref()
        .map(load_sources_file)
        .transpose()
        .context("load sources file")?;

    let config = Config {
        sources: resolve_sources(from_file, cli.sources),
        output_path: cli.output,
        timeout: cli.timeout.map(Duration::from_secs),
        create_parent: cli.create_parent,
    };

    let report = run(&config).await;
    info!(
        matched = report.lines.len(),
        parsed = report.parsed(),
        empty = report.empty(),
        skipped = report.skipped(),
        failed = report.failed(),
        "all sources processed"
    );

    let lines = report.into_lines();
    write_output(&config.output_path, &lines, config.create_parent)
        .context("write filtered configs")?;

    info!(output = %config.output_path.display(), "filtered configs saved");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
