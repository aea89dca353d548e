use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::time::Duration;

mod output;
mod scenarios;
mod sse_client;

use output::print_test_summary;

#[derive(Parser)]
#[command(name = "sse-test-client")]
#[command(about = "Echo stream SSE smoke testing tool")]
struct Cli {
    /// Base URL of the server (e.g., http://localhost:4000)
    #[arg(long)]
    base_url: String,

    /// Message to send to the echo endpoints
    #[arg(long, default_value = "abc")]
    message: String,

    /// Seconds to listen on each stream before checking what arrived
    #[arg(long, default_value_t = 3)]
    window_secs: u64,

    /// Test scenario to run
    #[arg(long, value_enum, default_value = "all")]
    scenario: ScenarioChoice,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone)]
enum ScenarioChoice {
    /// Basic echo stream with unix timestamps (/sse)
    Echo,
    /// Typed echo stream (/sse2)
    TypedEcho,
    /// Merged echo and reverse echo stream (/sse3)
    Merged,
    /// Run all scenarios
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    println!("{}", "=== SETUP PHASE ===".bright_white().bold());
    println!("{} Checking server health...", "→".blue());
    let health = reqwest::get(format!("{}/health", cli.base_url.trim_end_matches('/')))
        .await
        .context("Server is not reachable")?;
    if !health.status().is_success() {
        anyhow::bail!("Health check failed with status {}", health.status());
    }
    println!("{} Server is healthy", "✓".green());

    println!("\n{}", "=== TEST PHASE ===".bright_white().bold());
    let window = Duration::from_secs(cli.window_secs);
    let mut results = Vec::new();

    if matches!(cli.scenario, ScenarioChoice::Echo | ScenarioChoice::All) {
        results.push(scenarios::test_echo(&cli.base_url, &cli.message, window, cli.verbose).await?);
    }
    if matches!(cli.scenario, ScenarioChoice::TypedEcho | ScenarioChoice::All) {
        results.push(
            scenarios::test_typed_echo(&cli.base_url, &cli.message, window, cli.verbose).await?,
        );
    }
    if matches!(cli.scenario, ScenarioChoice::Merged | ScenarioChoice::All) {
        results
            .push(scenarios::test_merged(&cli.base_url, &cli.message, window, cli.verbose).await?);
    }

    // Print summary
    println!("\n{}", "=== RESULTS ===".bright_white().bold());
    print_test_summary(&results);

    let all_passed = results.iter().all(|r| r.passed);

    if all_passed {
        println!("\n{}", "All tests passed! ✓".bright_green().bold());
    } else {
        println!("\n{}", "Some tests failed! ✗".bright_red().bold());
    }

    std::process::exit(if all_passed { 0 } else { 1 });
}
