//! proxyconf CLI entry point
//!
//! Dispatches to subcommands.

use clap::Parser;
use console::style;
use proxyconf::cli::args::{ConfigAction, ConfigArgs};
use proxyconf::cli::{Cli, Commands};
use proxyconf::config::ConfigManager;
use proxyconf::error::ProxyconfResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ProxyconfResult<()> {
    let cli = Cli::parse();

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("proxyconf=warn"),
        1 => EnvFilter::new("proxyconf=info"),
        _ => EnvFilter::new("proxyconf=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config_manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };

    // Init must work even when the existing file does not parse
    if let Commands::Config(ConfigArgs {
        action: Some(ConfigAction::Init { force }),
    }) = cli.command
    {
        return proxyconf::cli::commands::config::init_config(&config_manager, force).await;
    }

    let config = config_manager.load().await?;

    match cli.command {
        Commands::Resolve(args) => proxyconf::cli::commands::resolve(args, &config).await,
        Commands::Detect(args) => proxyconf::cli::commands::detect(args, &config).await,
        Commands::Get(args) => proxyconf::cli::commands::get(args, &config).await,
        Commands::Config(args) => {
            proxyconf::cli::commands::config(args, &config_manager, &config).await
        }
    }
}
