//! Memoizing configuration reader
//!
//! Every key is queried from the source at most once per cache. Failures
//! are cached as absence, same as keys the package manager reports unset.

use crate::manager::PackageManager;
use crate::source::ConfigSource;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Cache entry identity: the same key may differ between projects
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    cwd: PathBuf,
    manager: PackageManager,
    key: String,
}

/// Cached configuration values, absence included
///
/// Entries are never invalidated; configuration is assumed not to change
/// while the cache is alive.
#[derive(Debug, Clone, Default)]
pub struct ConfigCache {
    entries: HashMap<CacheKey, Option<String>>,
}

impl ConfigCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached value. The outer `Option` is a cache miss.
    pub fn get(&self, cwd: &Path, manager: PackageManager, key: &str) -> Option<Option<&str>> {
        self.entries
            .get(&CacheKey {
                cwd: cwd.to_path_buf(),
                manager,
                key: key.to_string(),
            })
            .map(|value| value.as_deref())
    }

    /// Record a value (or its absence)
    pub fn insert(&mut self, cwd: &Path, manager: PackageManager, key: &str, value: Option<String>) {
        self.entries.insert(
            CacheKey {
                cwd: cwd.to_path_buf(),
                manager,
                key: key.to_string(),
            },
            value,
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Reads keys for one project through a cache
pub struct ConfigReader<'a, S: ConfigSource + ?Sized> {
    source: &'a S,
    cache: &'a mut ConfigCache,
    cwd: &'a Path,
    manager: PackageManager,
}

impl<'a, S: ConfigSource + ?Sized> ConfigReader<'a, S> {
    /// Create a reader scoped to a working directory and package manager
    pub fn new(
        source: &'a S,
        cache: &'a mut ConfigCache,
        cwd: &'a Path,
        manager: PackageManager,
    ) -> Self {
        Self {
            source,
            cache,
            cwd,
            manager,
        }
    }

    /// Read a key, treating an unavailable source as unset
    pub async fn read(&mut self, key: &str) -> Option<String> {
        if let Some(cached) = self.cache.get(self.cwd, self.manager, key) {
            return cached.map(str::to_string);
        }

        let value = match self.source.read(key, self.cwd, self.manager).await {
            Ok(value) => value,
            Err(e) => {
                debug!("Could not read {} config '{}': {}", self.manager, key, e);
                None
            }
        };

        self.cache.insert(self.cwd, self.manager, key, value.clone());
        value
    }

    /// Read keys in order and return the first one that is set
    ///
    /// Later keys are not queried once an earlier one has a value.
    pub async fn read_first(&mut self, keys: &[&str]) -> Option<String> {
        for key in keys {
            if let Some(value) = self.read(key).await {
                return Some(value);
            }
        }
        None
    }
}
