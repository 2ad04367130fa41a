//! Detect command - show the package manager for a project

use super::{command_resolver, project_dir};
use crate::cli::args::DetectArgs;
use crate::config::Config;
use crate::error::ProxyconfResult;

/// Execute the detect command
pub async fn execute(args: DetectArgs, config: &Config) -> ProxyconfResult<()> {
    let cwd = project_dir(args.cwd)?;
    println!("{}", command_resolver(config).detect(&cwd));
    Ok(())
}
