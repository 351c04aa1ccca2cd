mod cli;

use crate::cli::{Cli, Commands};
use clap::Parser;
use tracing::{error, info};

use drive_photocast::application::use_cases::{CheckSetupUseCase, RunServerUseCase};
use drive_photocast::config::AppConfig;
use drive_photocast::debug::{DebugConfig, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let debug_config = DebugConfig::default();
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        built = env!("BUILD_TIMESTAMP"),
        "drive-photocast starting"
    );

    // Missing folder id or credentials is fatal at startup
    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Run { port, host } => {
            info!("Starting application...");
            config.host = host;
            if let Some(port) = port {
                config.port = port;
            }

            let use_case = RunServerUseCase::new();
            match use_case.execute(config).await {
                Ok(_) => {
                    info!("Application terminated normally");
                }
                Err(e) => {
                    error!("Application failed: {}", e);
                    eprintln!("❌ Application failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check => {
            info!("Checking setup...");
            let use_case = CheckSetupUseCase::new();
            match use_case.execute(&config).await {
                Ok(count) => {
                    println!("✅ Drive folder reachable: {} photo(s) visible", count);
                }
                Err(e) => {
                    error!("Check failed: {}", e);
                    eprintln!("❌ Check failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
