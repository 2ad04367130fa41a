//! Configuration source backed by the package manager CLI

use super::{normalize_output, ConfigSource};
use crate::config::schema::CommandsConfig;
use crate::error::{ProxyconfError, ProxyconfResult};
use crate::manager::PackageManager;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Reads configuration by running `<manager> config get <key>`
#[derive(Debug, Clone)]
pub struct CommandConfigSource {
    npm: String,
    yarn: String,
}

impl CommandConfigSource {
    /// Create a source that runs `npm` and `yarn` from PATH
    pub fn new() -> Self {
        Self::from_commands(&CommandsConfig::default())
    }

    /// Create a source with configured executables
    pub fn from_commands(commands: &CommandsConfig) -> Self {
        Self {
            npm: commands.npm.clone(),
            yarn: commands.yarn.clone(),
        }
    }

    /// Executable used for a package manager
    pub fn program(&self, manager: PackageManager) -> &str {
        match manager {
            PackageManager::Npm => &self.npm,
            PackageManager::Yarn => &self.yarn,
        }
    }
}

impl Default for CommandConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigSource for CommandConfigSource {
    async fn read(
        &self,
        key: &str,
        cwd: &Path,
        manager: PackageManager,
    ) -> ProxyconfResult<Option<String>> {
        let program = self.program(manager);
        let command = format!("{} config get {}", program, key);
        debug!("Executing: {} (in {})", command, cwd.display());

        let output = Command::new(program)
            .args(["config", "get", key])
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ProxyconfError::command_failed(&command, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProxyconfError::command_exec(command, stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(normalize_output(&stdout, manager))
    }
}
