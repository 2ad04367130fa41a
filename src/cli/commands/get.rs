//! Get command - read one normalized config value

use super::{command_resolver, project_dir};
use crate::cli::args::GetArgs;
use crate::config::Config;
use crate::error::ProxyconfResult;

/// Execute the get command
///
/// Prints nothing when the key is unset or cannot be read.
pub async fn execute(args: GetArgs, config: &Config) -> ProxyconfResult<()> {
    let cwd = project_dir(args.cwd)?;
    if let Some(value) = command_resolver(config).get(&cwd, &args.key).await {
        println!("{}", value);
    }
    Ok(())
}
