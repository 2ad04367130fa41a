//! CLI command implementations

pub mod config;
pub mod detect;
pub mod get;
pub mod resolve;

pub use config::execute as config;
pub use detect::execute as detect;
pub use get::execute as get;
pub use resolve::execute as resolve;

use crate::config::Config;
use crate::error::{ProxyconfError, ProxyconfResult};
use crate::options::ProxyOptionsResolver;
use crate::source::CommandConfigSource;
use std::path::PathBuf;

/// Use the given directory or fall back to the current one
pub(crate) fn project_dir(cwd: Option<PathBuf>) -> ProxyconfResult<PathBuf> {
    match cwd {
        Some(dir) => Ok(dir),
        None => std::env::current_dir()
            .map_err(|e| ProxyconfError::io("getting current directory", e)),
    }
}

/// Build a resolver backed by the configured package manager executables
pub(crate) fn command_resolver(config: &Config) -> ProxyOptionsResolver<CommandConfigSource> {
    ProxyOptionsResolver::new(CommandConfigSource::from_commands(&config.commands))
        .with_markers(config.detection.markers.clone())
}
