//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// proxyconf - proxy and TLS settings from npm or yarn configuration
///
/// Reads proxy, no-proxy, strict-ssl, client certificate and CA settings
/// the way the project's package manager sees them.
#[derive(Parser, Debug)]
#[command(name = "proxyconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PROXYCONF_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve proxy and TLS options for a project
    Resolve(ResolveArgs),

    /// Show which package manager a project uses
    Detect(DetectArgs),

    /// Read a single package manager config value
    Get(GetArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long)]
    pub cwd: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the detect command
#[derive(Parser, Debug)]
pub struct DetectArgs {
    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long)]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Config key, e.g. https-proxy
    pub key: String,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long)]
    pub cwd: Option<PathBuf>,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., commands.npm)
        key: String,

        /// Value to set
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resolve_json() {
        let cli = Cli::try_parse_from(["proxyconf", "resolve", "-C", "/tmp", "--format", "json"])
            .unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.cwd, Some(PathBuf::from("/tmp")));
                assert!(matches!(args.format, OutputFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["proxyconf", "-vv", "detect"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
