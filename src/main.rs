//! mudcalc - Drilling Fluid Circulation Calculator
//!
//! Computes circulation volumes and times, weighting quantities and mud
//! densities for a well plan, or serves the demo HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Compute and log every result for ./well_plan.toml (or built-in defaults)
//! mudcalc
//!
//! # Use a specific well plan
//! mudcalc --config plans/well-42.toml report
//!
//! # Serve the HTTP API on 0.0.0.0:10000
//! mudcalc serve --addr 0.0.0.0:10000
//! ```
//!
//! # Environment Variables
//!
//! - `MUDCALC_CONFIG`: Path to the well plan TOML file
//! - `MUDCALC_SERVER_ADDR`: HTTP bind address for `serve`
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use mudcalc::api::{create_app, ApiState};
use mudcalc::{CirculationReport, WellPlan};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "mudcalc")]
#[command(about = "Drilling fluid circulation, weighting and density calculator")]
#[command(version)]
struct CliArgs {
    /// Well plan TOML file. Without it: $MUDCALC_CONFIG, ./well_plan.toml, then defaults
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Compute every formula once and log the results (default)
    Report,

    /// Serve the HTTP API
    Serve {
        /// Override the bind address (default from well plan: "0.0.0.0:10000")
        #[arg(short, long, env = "MUDCALC_SERVER_ADDR")]
        addr: Option<String>,
    },

    /// Print the effective well plan as TOML
    PrintConfig,
}

/// Load the plan from an explicit path (hard failure) or the search order.
fn load_plan(path: Option<&PathBuf>) -> Result<WellPlan> {
    match path {
        Some(p) => {
            let plan = WellPlan::load_from_file(p)
                .with_context(|| format!("Failed to load well plan {}", p.display()))?;
            info!(path = %p.display(), well = %plan.well.name, "Loaded well plan");
            Ok(plan)
        }
        None => Ok(WellPlan::load()),
    }
}

// ============================================================================
// Commands
// ============================================================================

fn run_report(plan: &WellPlan) -> ExitCode {
    info!(
        "Well: {} | Field: {} | Rig: {}",
        plan.well.name,
        if plan.well.field.is_empty() { "unset" } else { &plan.well.field },
        if plan.well.rig.is_empty() { "unset" } else { &plan.well.rig },
    );

    let report = CirculationReport::compute(plan);
    report.log();

    if report.has_errors() {
        error!(failed = report.error_count(), "Some calculations could not be completed");
    }
    ExitCode::from(report.exit_status())
}

async fn run_server(plan: WellPlan, addr: Option<String>) -> Result<()> {
    let server_addr = addr.unwrap_or_else(|| plan.server.addr.clone());
    let app = create_app(ApiState::new(plan));

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;
    info!("HTTP server listening on {}", server_addr);
    info!("API docs available at: http://{}/docs", server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Received shutdown signal");
        })
        .await
        .context("HTTP server error")?;

    info!("Graceful shutdown complete");
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging on stderr; stdout carries print-config output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let plan = load_plan(args.config.as_ref())?;

    match args.command.unwrap_or(SubCommand::Report) {
        SubCommand::Report => Ok(run_report(&plan)),
        SubCommand::Serve { addr } => {
            run_server(plan, addr).await?;
            Ok(ExitCode::SUCCESS)
        }
        SubCommand::PrintConfig => {
            print!("{}", plan.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
