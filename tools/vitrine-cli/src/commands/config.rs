//! `vitrine config` - inspect or scaffold configuration.

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};

use crate::config::generate_default_config;
use crate::context::{Context, DEFAULT_CONFIG_FILE};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the resolved configuration
    Show,

    /// Write a default vitrine.toml to the working directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            if ctx.output.is_json() {
                ctx.output.json(&ctx.config);
                return Ok(());
            }
            ctx.output.header("Configuration");
            ctx.output.kv("catalog.base_url", &ctx.config.catalog.base_url);
            ctx.output.kv(
                "catalog.max_retries",
                &ctx.config.catalog.max_retries.to_string(),
            );
            ctx.output
                .kv("display.mode", &format!("{:?}", ctx.config.display.mode));
            ctx.output
                .kv("display.currency", ctx.config.display.currency.code());
            ctx.output
                .kv("display.locale", ctx.config.display.locale.tag());
        }
        ConfigAction::Init { force } => {
            if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() && !force {
                bail!("{DEFAULT_CONFIG_FILE} already exists (use --force to overwrite)");
            }
            std::fs::write(DEFAULT_CONFIG_FILE, generate_default_config())
                .with_context(|| format!("Failed to write {DEFAULT_CONFIG_FILE}"))?;
            ctx.output.success(&format!("wrote {DEFAULT_CONFIG_FILE}"));
        }
    }

    Ok(())
}
