//! Proxy options assembly
//!
//! Reads the proxy and TLS keys through a [`ConfigReader`] and reshapes them
//! into [`ResolvedOptions`]. Resolution is fail-open: anything that cannot be
//! read is reported as not configured.

use crate::ca_bundle::read_ca_bundle;
use crate::manager::{absolute_dir, detect_package_manager, PackageManager, DEFAULT_MARKERS};
use crate::reader::{ConfigCache, ConfigReader};
use crate::source::{CommandConfigSource, ConfigSource};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration keys, in the order they are read
pub mod keys {
    pub const HTTPS_PROXY: &str = "https-proxy";
    pub const PROXY: &str = "proxy";
    pub const NOPROXY: &str = "noproxy";
    pub const NO_PROXY: &str = "no-proxy";
    pub const STRICT_SSL: &str = "strict-ssl";
    pub const CERT: &str = "cert";
    pub const CA: &str = "ca";
    pub const CAFILE: &str = "cafile";
}

/// Network options derived from package manager configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    /// Proxy URL for outbound requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,

    /// Hosts that bypass the proxy
    #[serde(rename = "noProxy")]
    pub no_proxy: Vec<String>,

    /// Whether TLS certificates must be verified
    #[serde(rename = "strictSSL")]
    pub strict_ssl: bool,

    /// Client certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,

    /// Extra CA certificates; never `Some` of an empty list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<Vec<String>>,
}

/// Resolves [`ResolvedOptions`] for project directories
///
/// The cache lives as long as the resolver. Resolving the same directory
/// twice reuses earlier reads; entries for different directories are kept
/// apart.
pub struct ProxyOptionsResolver<S: ConfigSource> {
    source: S,
    cache: ConfigCache,
    markers: Vec<String>,
}

impl<S: ConfigSource> ProxyOptionsResolver<S> {
    /// Create a resolver with an empty cache and the default yarn markers
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: ConfigCache::new(),
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Replace the marker files used for package manager detection
    pub fn with_markers(mut self, markers: Vec<String>) -> Self {
        self.markers = markers;
        self
    }

    /// Start from an existing cache
    pub fn with_cache(mut self, cache: ConfigCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &ConfigCache {
        &self.cache
    }

    /// Give the cache back to the caller
    pub fn into_cache(self) -> ConfigCache {
        self.cache
    }

    /// Detect the package manager for a directory
    pub fn detect(&self, cwd: &Path) -> PackageManager {
        detect_package_manager(cwd, self.markers.as_slice())
    }

    /// Read one key for a directory through the cache
    pub async fn get(&mut self, cwd: &Path, key: &str) -> Option<String> {
        let cwd = absolute_dir(cwd);
        let manager = self.detect(&cwd);
        ConfigReader::new(&self.source, &mut self.cache, &cwd, manager)
            .read(key)
            .await
    }

    /// Resolve proxy and TLS options for a directory
    pub async fn resolve(&mut self, cwd: &Path) -> ResolvedOptions {
        self.resolve_with_manager(cwd).await.1
    }

    /// Resolve options and report which package manager they came from
    pub async fn resolve_with_manager(&mut self, cwd: &Path) -> (PackageManager, ResolvedOptions) {
        let cwd = absolute_dir(cwd);
        let manager = self.detect(&cwd);
        debug!("Resolving proxy options for {} using {}", cwd.display(), manager);

        let mut reader = ConfigReader::new(&self.source, &mut self.cache, &cwd, manager);

        let proxy = reader.read_first(&[keys::HTTPS_PROXY, keys::PROXY]).await;

        let no_proxy = reader
            .read_first(&[keys::NOPROXY, keys::NO_PROXY])
            .await
            .map(|list| split_list(&list))
            .unwrap_or_default();

        let strict_ssl = reader.read(keys::STRICT_SSL).await.as_deref() == Some("true");

        let cert = reader.read(keys::CERT).await;

        let mut ca: Vec<String> = reader.read(keys::CA).await.into_iter().collect();

        if let Some(cafile) = reader.read(keys::CAFILE).await {
            let path = cwd.join(cafile);
            match read_ca_bundle(&path).await {
                Ok(certs) => ca.extend(certs),
                Err(e) => debug!("Ignoring CA bundle: {}", e),
            }
        }

        let options = ResolvedOptions {
            proxy,
            no_proxy,
            strict_ssl,
            cert,
            ca: if ca.is_empty() { None } else { Some(ca) },
        };

        info!(
            "Resolved {} options: proxy={}, {} no-proxy host(s), strict-ssl={}",
            manager,
            options.proxy.as_deref().unwrap_or("none"),
            options.no_proxy.len(),
            options.strict_ssl
        );

        (manager, options)
    }
}

/// Resolve options for a directory with the installed npm/yarn
pub async fn resolve_proxy_options(cwd: &Path) -> ResolvedOptions {
    ProxyOptionsResolver::new(CommandConfigSource::new())
        .resolve(cwd)
        .await
}

/// Split a comma separated list, trimming entries and dropping empty ones
///
/// Stricter than a plain comma split on purpose: `"a.com, b.com,"` yields
/// `["a.com", "b.com"]`, never `" b.com"` or `""`.
fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
