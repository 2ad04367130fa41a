//! Resolve command - print proxy and TLS options

use super::{command_resolver, project_dir};
use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::config::Config;
use crate::error::ProxyconfResult;
use crate::options::ResolvedOptions;
use crate::ui::{self, UiContext};

/// Execute the resolve command
pub async fn execute(args: ResolveArgs, config: &Config) -> ProxyconfResult<()> {
    let cwd = project_dir(args.cwd)?;
    let mut resolver = command_resolver(config);
    let (manager, options) = resolver.resolve_with_manager(&cwd).await;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&options)?),
        OutputFormat::Table => print_table(&manager.to_string(), &options),
    }

    Ok(())
}

fn print_table(manager: &str, options: &ResolvedOptions) {
    let ctx = UiContext::detect();
    ui::section(&ctx, &format!("Proxy options ({})", manager));

    ui::key_value(&ctx, "proxy", options.proxy.as_deref().unwrap_or("-"));

    let no_proxy = if options.no_proxy.is_empty() {
        "-".to_string()
    } else {
        options.no_proxy.join(", ")
    };
    ui::key_value(&ctx, "no-proxy", &no_proxy);

    ui::key_value_status(
        &ctx,
        "strict-ssl",
        &options.strict_ssl.to_string(),
        options.strict_ssl,
    );
    ui::key_value(&ctx, "cert", if options.cert.is_some() { "set" } else { "-" });

    let ca = match &options.ca {
        Some(certs) => format!("{} certificate(s)", certs.len()),
        None => "-".to_string(),
    };
    ui::key_value(&ctx, "ca", &ca);
}
