//! Shared command context.

use std::path::Path;

use anyhow::Result;

use crate::config::CliConfig;
use crate::output::Output;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vitrine.toml";

/// Context passed to every command.
pub struct Context {
    /// Loaded configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load the context, reading config from `path` if given, from
    /// `vitrine.toml` if present, and falling back to defaults.
    pub fn load(path: Option<&str>, output: Output) -> Result<Self> {
        let config = match path {
            Some(p) => CliConfig::load(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                output.debug(&format!("using {}", DEFAULT_CONFIG_FILE));
                CliConfig::load(DEFAULT_CONFIG_FILE)?
            }
            None => CliConfig::default(),
        };

        Ok(Self { config, output })
    }
}
