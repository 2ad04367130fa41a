//! CA bundle splitting
//!
//! A bundle file is a concatenation of PEM certificates. Each certificate
//! becomes one single-line entry with its line breaks written as `\n`.

use crate::error::{ProxyconfError, ProxyconfResult};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Marker closing every PEM certificate block
pub const END_CERTIFICATE: &str = "-----END CERTIFICATE-----";

/// Split bundle text into escaped single-line certificate blocks
///
/// Only complete blocks are returned; trailing text without an end marker
/// is dropped.
pub fn split_ca_bundle(content: &str) -> Vec<String> {
    let mut certs = Vec::new();
    let mut rest = content;

    while let Some(idx) = rest.find(END_CERTIFICATE) {
        let end = idx + END_CERTIFICATE.len();
        certs.push(escape_line_breaks(&rest[..end]));
        rest = &rest[end..];
    }

    certs
}

/// Drop one leading line break, then escape the remaining ones
fn escape_line_breaks(block: &str) -> String {
    let unified = block.replace("\r\n", "\n");
    let body = unified.strip_prefix('\n').unwrap_or(unified.as_str());
    body.replace('\n', "\\n")
}

/// Read and split a CA bundle file
pub async fn read_ca_bundle(path: &Path) -> ProxyconfResult<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| ProxyconfError::io(format!("reading CA bundle {}", path.display()), e))?;

    let certs = split_ca_bundle(&content);
    debug!("Loaded {} certificate(s) from {}", certs.len(), path.display());
    Ok(certs)
}
