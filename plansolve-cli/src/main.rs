//! plansolve command-line front-end.
//!
//! Reads a PDDL domain and problem file, solves through the chosen strategy,
//! and prints the resulting steps. An empty plan exits 0 with an explicit
//! "no plan produced" message; per the library contract it can mean either
//! that no plan exists or that solving failed (details are in the logs).
//!
//! Usage:
//!   plansolve <DOMAIN> <PROBLEM> [--strategy remote|local]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use plansolve::{LogStatusSink, Plan, PlanningInput, Solver, SolverConfig};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "plansolve")]
#[command(about = "Solve a PDDL planning problem via a hosted service or a local planner")]
struct Args {
    /// Path to the PDDL domain file
    domain: String,

    /// Path to the PDDL problem file
    problem: String,

    /// Solving strategy
    #[arg(long, value_enum, default_value = "remote")]
    strategy: Strategy,

    /// Path to a TOML configuration file
    #[arg(long, env = "PLANSOLVE_CONFIG_PATH")]
    config_path: Option<String>,

    /// Override the remote service base URL
    #[arg(long, env = "PLANSOLVE_BASE_URL")]
    base_url: Option<String>,

    /// Override the local planner executable
    #[arg(long, env = "PLANSOLVE_EXECUTABLE")]
    executable: Option<String>,

    /// Override the per-strategy timeout in milliseconds (HTTP request
    /// timeout for remote, planner run deadline for local)
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Remote,
    Local,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let domain = std::fs::read_to_string(&args.domain)
        .with_context(|| format!("reading domain file {}", args.domain))?;
    let problem = std::fs::read_to_string(&args.problem)
        .with_context(|| format!("reading problem file {}", args.problem))?;
    let input = PlanningInput::new(domain, problem);

    let solver = Solver::with_status_sink(config, Arc::new(LogStatusSink))?;
    let plan = match args.strategy {
        Strategy::Remote => solver.solve_remote(&input).await,
        Strategy::Local => solver.solve_local(&input).await,
    };

    print_plan(&plan);
    Ok(())
}

fn build_config(args: &Args) -> Result<SolverConfig> {
    let mut config = match &args.config_path {
        Some(path) => {
            SolverConfig::load(path).with_context(|| format!("loading config from {}", path))?
        }
        None => SolverConfig::default(),
    };
    if let Some(base_url) = &args.base_url {
        config.remote = config.remote.with_base_url(base_url);
    }
    if let Some(executable) = &args.executable {
        config.local = config.local.with_executable(executable);
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.remote = config.remote.with_request_timeout_ms(timeout_ms);
        config.local = config.local.with_run_timeout_ms(timeout_ms);
    }
    Ok(config)
}

fn print_plan(plan: &Plan) {
    if plan.is_empty() {
        println!("no plan produced");
        return;
    }
    info!("plan with {} step(s)", plan.len());
    for (i, step) in plan.iter().enumerate() {
        println!("{:>3}. {}", i + 1, step);
    }
}
