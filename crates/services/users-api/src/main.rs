//! Users API - HTTP server for the users resource.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use common::telemetry;
use users_api_lib::config::UsersApiConfig;

#[derive(Parser)]
#[command(name = "users-api")]
#[command(about = "CRUD HTTP API for users")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        /// JSON file with the initial users
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, seed } => {
            let config = UsersApiConfig::from_env().with_overrides(host, port, seed);
            telemetry::init_tracing(&config.service.log_level, cli.verbose);
            tracing::debug!("Configuration loaded: {:?}", config);
            users_api_lib::run_server(config).await?;
        }
    }

    Ok(())
}
