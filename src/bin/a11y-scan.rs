//! a11y-scan
//!
//! Opens a page in Chrome/Chromium, injects the scan engine and prints the violations it reports.

use anyhow::Context;
use browser_a11y::{report, BrowserSession, ConnectionOptions, LaunchOptions, ScanOptions, ScriptSource};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode, time::Duration};

#[derive(Parser)]
#[command(name = "a11y-scan")]
#[command(version)]
#[command(about = "Accessibility scan of a web page", long_about = None)]
struct Cli {
    /// URL of the page to scan
    url: String,

    /// Path to the scan engine script (for example axe.min.js)
    #[arg(long, short = 's', value_name = "PATH")]
    script: PathBuf,

    /// CSS selector to include in the scan (repeatable)
    #[arg(long, short = 'i', value_name = "SELECTOR")]
    include: Vec<String>,

    /// CSS selector to exclude from the scan (repeatable)
    #[arg(long, short = 'e', value_name = "SELECTOR")]
    exclude: Vec<String>,

    /// Engine options as JSON (default: engine defaults)
    #[arg(long, value_name = "JSON")]
    options: Option<String>,

    /// Scan timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Global the engine registers itself under
    #[arg(long, default_value = "axe")]
    engine_global: String,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// WebSocket endpoint URL for remote browser connection
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    /// Write the full result as JSON to this file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the full result as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let options = match &cli.options {
        Some(raw) => ScanOptions::from_raw(raw)?,
        None => ScanOptions::engine_defaults(),
    };

    let session = match &cli.ws_endpoint {
        Some(endpoint) => {
            // The connection must outlive the longest scan
            let connection = ConnectionOptions::new(endpoint.as_str());
            let scan_ms = cli.timeout_secs.saturating_add(60).saturating_mul(1000);
            let timeout = connection.timeout.max(scan_ms);
            BrowserSession::connect(connection.timeout(timeout))?
        }
        None => BrowserSession::launch(LaunchOptions::new().headless(!cli.headed))?,
    };

    session.navigate(&cli.url)?;
    session.wait_for_navigation()?;

    let result = session
        .scanner(&ScriptSource::file(&cli.script))
        .with_context(|| format!("Failed to prepare scan of {}", cli.url))?
        .include(cli.include.iter().map(String::as_str))
        .exclude(cli.exclude.iter().map(String::as_str))
        .options(options)
        .timeout(Duration::from_secs(cli.timeout_secs))
        .engine_global(cli.engine_global.as_str())
        .analyze()?;

    if let Some(path) = &cli.output {
        report::write_results(path, &result)?;
        eprintln!("Results written to {}", path.display());
    }

    if cli.json {
        println!("{}", result.to_json()?);
    } else if result.has_violations() {
        println!("{}", report::report(result.violations()));
    } else {
        println!("No accessibility violations found ({} passes)", result.passes().len());
    }

    Ok(if result.has_violations() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
