//! profit-leak: HTTP service and CLI for the clinic profit leak calculator

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use clinic_profit_leak::api::{create_app, ApiState};
use clinic_profit_leak::delivery::mailto_link;
use clinic_profit_leak::{analyze, CalculatorConfig, ClinicInputs, Scenario, SubmissionCoordinator};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "profit-leak")]
#[command(about = "Clinic Profit Leak Calculator")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default from config: "0.0.0.0:8080")
    #[arg(short, long, env = "LEAK_SERVER_ADDR")]
    addr: Option<String>,

    /// Path to calculator.toml (default: $LEAK_CONFIG, then ./calculator.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Run the HTTP API (default)
    Serve,

    /// Print the full analysis for a set of inputs as JSON
    Project {
        /// Inputs file (.toml or .json); missing fields take form defaults
        #[arg(long)]
        inputs: Option<PathBuf>,
        /// conservative, expected or aggressive
        #[arg(long, default_value = "expected")]
        scenario: Scenario,
    },

    /// Print the pre-filled mailto link for a set of inputs
    Mailto {
        #[arg(long)]
        inputs: Option<PathBuf>,
        #[arg(long, default_value = "expected")]
        scenario: Scenario,
    },
}

// ============================================================================
// Helpers
// ============================================================================

fn load_config(path: Option<&Path>) -> Result<CalculatorConfig> {
    match path {
        Some(p) => CalculatorConfig::load_from_file(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => Ok(CalculatorConfig::load()),
    }
}

fn load_inputs(path: Option<&Path>) -> Result<ClinicInputs> {
    let Some(path) = path else {
        return Ok(ClinicInputs::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read inputs from {}", path.display()))?;
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let inputs = if is_json {
        serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))?
    } else {
        toml::from_str(&raw).with_context(|| format!("Invalid TOML in {}", path.display()))?
    };
    Ok(inputs)
}

async fn serve(config: CalculatorConfig, addr_override: Option<String>) -> Result<()> {
    let server_addr = addr_override.unwrap_or_else(|| config.server.addr.clone());

    let coordinator = SubmissionCoordinator::from_config(&config)
        .context("Failed to set up delivery collaborators")?;
    let app = create_app(ApiState::new(coordinator, config));

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;
    info!("HTTP server listening on {}", server_addr);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received Ctrl+C, shutting down");
        })
        .await;

    match result {
        Ok(()) => {
            info!("Graceful shutdown complete");
            Ok(())
        }
        Err(e) => {
            error!("Server error: {}", e);
            Err(anyhow::anyhow!("HTTP server error: {e}"))
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command.unwrap_or(SubCommand::Serve) {
        SubCommand::Serve => serve(config, args.addr).await,
        SubCommand::Project { inputs, scenario } => {
            let inputs = load_inputs(inputs.as_deref())?;
            let analysis = analyze(&inputs, scenario);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
            Ok(())
        }
        SubCommand::Mailto { inputs, scenario } => {
            let inputs = load_inputs(inputs.as_deref())?;
            let analysis = analyze(&inputs, scenario);
            println!("{}", mailto_link(&config.contact.mailto_recipient, &inputs, &analysis));
            Ok(())
        }
    }
}
