//! In-memory configuration source

use super::{normalize_output, ConfigSource};
use crate::error::{ProxyconfError, ProxyconfResult};
use crate::manager::PackageManager;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves raw `config get` output from memory
///
/// Values go through the same normalization as command output, so a yarn
/// entry of `"\"foo\""` reads back as `foo`. Keys marked as failing return
/// an error as if the package manager could not be run.
#[derive(Debug, Default)]
pub struct MapConfigSource {
    values: HashMap<(PackageManager, String), String>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl MapConfigSource {
    /// Create an empty source; every key reads as unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw output for a key
    pub fn with_value(
        mut self,
        manager: PackageManager,
        key: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        self.values.insert((manager, key.into()), raw.into());
        self
    }

    /// Make reads of a key fail
    pub fn with_failure(mut self, key: impl Into<String>) -> Self {
        self.failing.insert(key.into());
        self
    }

    /// Number of reads served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigSource for MapConfigSource {
    async fn read(
        &self,
        key: &str,
        _cwd: &Path,
        manager: PackageManager,
    ) -> ProxyconfResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(key) {
            return Err(ProxyconfError::command_exec(
                format!("{} config get {}", manager, key),
                "simulated failure",
            ));
        }

        Ok(self
            .values
            .get(&(manager, key.to_string()))
            .and_then(|raw| normalize_output(raw, manager)))
    }
}
