//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{ProxyconfError, ProxyconfResult};
use crate::ui::{self, UiContext};

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    manager: &ConfigManager,
    config: &Config,
) -> ProxyconfResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => {
            let mut config = config.clone();
            set_value(&mut config, &key, &value)?;
            manager.save(&config).await?;

            let ctx = UiContext::detect();
            ui::step_ok(&ctx, &format!("Set {} = {}", key, value));
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> ProxyconfResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

/// Write the default configuration, keeping an existing file unless forced
pub async fn init_config(manager: &ConfigManager, force: bool) -> ProxyconfResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    ui::step_ok_detail(&ctx, "Configuration initialized", &path.display().to_string());

    Ok(())
}

/// Apply a dot-separated key to the configuration
fn set_value(config: &mut Config, key: &str, value: &str) -> ProxyconfResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["commands", "npm"] => config.commands.npm = value.to_string(),
        ["commands", "yarn"] => config.commands.yarn = value.to_string(),
        ["detection", "markers"] => {
            config.detection.markers = value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        _ => {
            return Err(ProxyconfError::User(format!(
                "Unknown config key: {}. Valid keys: commands.npm, commands.yarn, detection.markers",
                key
            )))
        }
    }

    Ok(())
}
