//! proxyconf - proxy and TLS trust settings from package manager config
//!
//! Detects whether a project uses npm or yarn, reads the relevant keys
//! through the package manager's `config get`, and reshapes them into
//! [`ResolvedOptions`] for an HTTP client.
//!
//! ```rust,ignore
//! let options = proxyconf::resolve_proxy_options(Path::new(".")).await;
//! if let Some(proxy) = &options.proxy {
//!     println!("routing through {}", proxy);
//! }
//! ```

pub mod ca_bundle;
pub mod cli;
pub mod config;
pub mod error;
pub mod manager;
pub mod options;
pub mod reader;
pub mod source;
pub mod ui;

pub use error::{ProxyconfError, ProxyconfResult};
pub use manager::{absolute_dir, detect_package_manager, PackageManager};
pub use options::{resolve_proxy_options, ProxyOptionsResolver, ResolvedOptions};
pub use reader::{ConfigCache, ConfigReader};
pub use source::{CommandConfigSource, ConfigSource, MapConfigSource};
