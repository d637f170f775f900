//! CLI Adapter.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::config::CONFIG_PATH_ENV;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "taigabot")]
#[command(version)]
#[command(about = "Create Taiga user stories and tasks from JSON templates", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./taigabot.toml when present)
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the webhook over HTTP
    #[clap(visible_alias = "s")]
    Serve {
        /// Listen address, overriding `server.bind`
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Run a payload file through the webhook pipeline, creating stories on Taiga
    #[clap(visible_alias = "i")]
    Invoke {
        /// JSON payload file
        payload: PathBuf,
    },
    /// Print the merged user stories for a payload without contacting Taiga
    #[clap(visible_alias = "r")]
    Render {
        /// JSON payload file
        payload: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::Serve { bind } => crate::serve(config, bind),
        Commands::Invoke { payload } => run_invoke(config, &payload),
        Commands::Render { payload } => run_render(config, &payload),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run_invoke(config: Option<&Path>, payload: &Path) -> Result<(), AppError> {
    let response = crate::invoke(config, payload)?;
    if response.is_success() {
        println!("✅ {}", response.body);
        Ok(())
    } else {
        eprintln!("❌ {} ({})", response.body, response.status);
        std::process::exit(1);
    }
}

fn run_render(config: Option<&Path>, payload: &Path) -> Result<(), AppError> {
    let document = crate::render(config, payload)?;
    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| AppError::InvalidUserStory(e.to_string()))?;
    println!("{json}");
    Ok(())
}
