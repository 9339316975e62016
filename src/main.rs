use anyhow::Context;
use api_client::{HttpStrategyClient, StrategyService};
use clap::{Parser, Subcommand};
use configuration::Config;
use database::{DbRepository, connect, run_migrations};
use engine::{AnalysisOutcome, StrategyAgent};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mod sample;

/// The main entry point for the strategy analysis pipeline.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => configuration::load_config_from(path),
        None => configuration::load_config(),
    }
    .context("Failed to load configuration")?;
    let _log_guard = configuration::init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args, config).await,
        Commands::Analyze(args) => handle_analyze(args, config).await,
        Commands::Probe(args) => handle_probe(args, config).await,
        Commands::Migrate => handle_migrate(config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Fetches strategy parameters, analyzes them, and serves the analysis endpoint.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the strategy service (POST /strategy).
    Serve(ServeArgs),
    /// Fetch records from the database and send them to the strategy service.
    Analyze(AnalyzeArgs),
    /// Send a built-in sample batch to a running strategy service.
    Probe(ProbeArgs),
    /// Apply the bundled database schema.
    Migrate,
}

#[derive(Parser)]
struct ServeArgs {
    /// The address to bind (overrides server.host).
    #[arg(long)]
    host: Option<String>,

    /// The port to listen on (overrides server.port).
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Maximum number of records to fetch (overrides database.default_limit).
    #[arg(long)]
    limit: Option<u32>,

    /// The strategy service endpoint (overrides strategy_service.url).
    #[arg(long)]
    url: Option<String>,
}

#[derive(Parser)]
struct ProbeArgs {
    /// The strategy service endpoint (overrides strategy_service.url).
    #[arg(long)]
    url: Option<String>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    strategy_service::run_server(&config.server).await
}

/// Handles one orchestration run and prints the combined result.
async fn handle_analyze(args: AnalyzeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(url) = args.url {
        config.strategy_service.url = url;
    }
    let limit = args.limit.unwrap_or(config.database.default_limit);

    let pool = connect(&config.database)?;
    let store = Arc::new(DbRepository::new(pool));
    let client = Arc::new(HttpStrategyClient::from_config(&config.strategy_service)?);
    let agent = StrategyAgent::new(store, client);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Analyzing up to {limit} records..."));

    let report = agent.execute_analysis(limit).await;
    spinner.finish_and_clear();

    println!("{}", serde_json::to_string_pretty(&report)?);
    if let Some(table) = report.display_output() {
        println!("\n=== STRATEGY PARAMETERS ===\n{table}");
    }

    match report.outcome() {
        AnalysisOutcome::Completed => Ok(()),
        AnalysisOutcome::FetchFailed => {
            anyhow::bail!("Analysis stopped: the database fetch failed.")
        }
        AnalysisOutcome::SendFailed => {
            anyhow::bail!("Analysis stopped: the strategy service call failed.")
        }
    }
}

/// Sends the sample batch to the service and prints what came back.
async fn handle_probe(args: ProbeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(url) = args.url {
        config.strategy_service.url = url;
    }
    let client = HttpStrategyClient::from_config(&config.strategy_service)?;
    tracing::info!(url = client.url(), "Probing strategy service.");

    let report = client
        .analyze(&sample::sample_batch())
        .await
        .context("Error testing service")?;

    println!("=== Table Output ===");
    println!("{}", report.display_output);
    println!("\n=== Analysis ===");
    println!("{}", serde_json::to_string_pretty(&report.analysis)?);
    println!("\n=== Summary ===");
    println!("{}", report.summary);
    Ok(())
}

async fn handle_migrate(config: Config) -> anyhow::Result<()> {
    let pool = connect(&config.database)?;
    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_accepts_limit_and_url_overrides() {
        let cli = Cli::try_parse_from([
            "strategy-agent",
            "--config",
            "local.toml",
            "analyze",
            "--limit",
            "5",
            "--url",
            "http://localhost:8080/strategy",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("local.toml")));
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.limit, Some(5));
                assert_eq!(args.url.as_deref(), Some("http://localhost:8080/strategy"));
            }
            _ => panic!("expected the analyze command"),
        }
    }

    #[test]
    fn negative_limit_is_rejected() {
        assert!(Cli::try_parse_from(["strategy-agent", "analyze", "--limit", "-1"]).is_err());
    }

    #[test]
    fn sample_batch_produces_the_reference_report() {
        let report = strategy_service::build_report(&sample::sample_batch()).unwrap();
        assert_eq!(report.summary, "Analyzed 5 parameters (4 active)");
        assert_eq!(report.analysis.value_stats.min, 0.3256);
        assert_eq!(report.analysis.value_stats.max, 1.8765);

        let top: Vec<f64> = report.analysis.top_parameters.iter().map(|p| p.value()).collect();
        assert_eq!(top, vec![1.8765, 1.3695, 0.9395]);
    }
}
