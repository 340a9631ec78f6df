//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use vitrine_core::config::{SearchConfig, ViewMode};
use vitrine_core::money::{Currency, Locale};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog endpoint configuration.
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Result display configuration.
    #[serde(default)]
    pub display: DisplaySection,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Build the library-level search configuration.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            base_url: self.catalog.base_url.clone(),
            mode: self.display.mode,
            currency: self.display.currency,
            locale: self.display.locale,
        }
    }
}

/// Catalog endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Retries after a retryable failure (default: none).
    #[serde(default)]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_retries: 0,
        }
    }
}

/// Result display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Result-shaping mode (plain or enriched).
    #[serde(default)]
    pub mode: ViewMode,

    /// Currency prices are denominated in.
    #[serde(default)]
    pub currency: Currency,

    /// Locale used for price display strings.
    #[serde(default)]
    pub locale: Locale,
}

/// Generate a default vitrine.toml config file.
pub fn generate_default_config() -> String {
    r#"# Vitrine configuration

[catalog]
base_url = "http://localhost:3333"
# Retries after a retryable failure (5xx, connection error)
max_retries = 0

[display]
# "enriched" attaches formatted prices and an aggregate total;
# "plain" passes products through untouched
mode = "enriched"
currency = "BRL"
locale = "pt-BR"
"#
    .to_string()
}
