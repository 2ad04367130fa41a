//! Configuration sources
//!
//! A source answers "what is key X set to" for one package manager in one
//! working directory. The result type keeps three outcomes apart:
//! - `Ok(Some(value))`: the key is configured
//! - `Ok(None)`: the package manager reports the key as unset
//! - `Err(_)`: the source could not be queried at all
//!
//! Turning the last case into "unset" is left to [`crate::reader::ConfigReader`].

mod command;
mod map;

pub use command::CommandConfigSource;
pub use map::MapConfigSource;

use crate::error::ProxyconfResult;
use crate::manager::PackageManager;
use async_trait::async_trait;
use std::path::Path;

/// Output values `config get` prints for keys that are not set
const UNSET_SENTINELS: &[&str] = &["undefined", "null"];

/// Abstract configuration source
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Read a single configuration key
    async fn read(
        &self,
        key: &str,
        cwd: &Path,
        manager: PackageManager,
    ) -> ProxyconfResult<Option<String>>;
}

/// Normalize raw `config get` output into an optional value
///
/// Yarn quotes string values, npm does not, so only yarn output has one
/// pair of enclosing double quotes removed. The literal words `undefined`
/// and `null` are how both managers print an unset key. Empty output is
/// unset too, so a blank preferred key falls through to its fallback.
pub fn normalize_output(raw: &str, manager: PackageManager) -> Option<String> {
    let mut value = raw.trim();

    if manager.strips_quotes() && value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
    {
        value = &value[1..value.len() - 1];
    }

    if value.is_empty() || UNSET_SENTINELS.contains(&value) {
        return None;
    }

    Some(value.to_string())
}
