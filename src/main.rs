//! Serverless API Proxy Launcher
//!
//! Container entry point for the API proxy on serverless platforms.
//!
//! # Startup Flow
//!
//! ```text
//!   platform env ──▶ Environment snapshot
//!                          │
//!                          ▼
//!                    build proxy args ───────────── PORT missing ──▶ exit 1
//!                          │
//!            ┌─────────────┴──────────────┐
//!            │ ok                          │ service / ESPv2_ARGS error
//!            ▼                             ▼
//!   exec interpreter + proxy       503 error server on PORT
//!   (process image replaced)       (serves until killed)
//! ```

use clap::Parser;

use apiproxy_launcher::config::schema::{DEFAULT_ENTRYPOINT, DEFAULT_INTERPRETER, DEFAULT_PLATFORM};
use apiproxy_launcher::lifecycle::{launch, plan};
use apiproxy_launcher::observability::logging;
use apiproxy_launcher::{Environment, LauncherConfig};

#[derive(Parser)]
#[command(name = "apiproxy-launcher")]
#[command(about = "Starts the API proxy from serverless platform environment variables", long_about = None)]
struct Cli {
    /// Interpreter the process is replaced with.
    #[arg(long, default_value = DEFAULT_INTERPRETER)]
    interpreter: String,

    /// Proxy entry point passed to the interpreter.
    #[arg(long, default_value = DEFAULT_ENTRYPOINT)]
    entrypoint: String,

    /// Value for --compute_platform_override.
    #[arg(long, default_value = DEFAULT_PLATFORM)]
    platform: String,

    /// Print the launch plan as JSON and exit.
    #[arg(long)]
    dry_run: bool,
}

impl From<&Cli> for LauncherConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            interpreter: cli.interpreter.clone(),
            entrypoint: cli.entrypoint.clone(),
            platform: cli.platform.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init();

    tracing::info!("apiproxy-launcher v{} starting", env!("CARGO_PKG_VERSION"));

    let env = Environment::from_process();
    let config = LauncherConfig::from(&cli);

    let plan = plan(&env, &config).inspect_err(|e| {
        tracing::error!(error = %e, "Cannot start proxy or error server");
    })?;

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    launch(plan).inspect_err(|e| {
        tracing::error!(error = %e, "Launch failed");
    })?;

    Ok(())
}
