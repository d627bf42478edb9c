use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest number of decimals the renderer will honour.
pub const MAX_DECIMALS: usize = 12;

/// How the option-type text is matched against `call` / `put`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindMatching {
    /// Only the exact lowercase words `call` and `put` are accepted
    #[default]
    Exact,
    /// Any ASCII casing of `call` / `put` is accepted
    CaseInsensitive,
}

/// Presentation settings for rendered results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol placed in front of the price
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Digits after the decimal point
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// Text before the price on success
    #[serde(default = "default_price_label")]
    pub price_label: String,

    /// Text before the message on failure
    #[serde(default = "default_error_label")]
    pub error_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimals: default_decimals(),
            price_label: default_price_label(),
            error_label: default_error_label(),
        }
    }
}

/// Main configuration struct for the form layer and CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricerConfig {
    /// Matching policy for the option-type field
    #[serde(default)]
    pub kind_matching: KindMatching,

    /// Strip surrounding whitespace from every field before parsing
    #[serde(default = "default_trim_input")]
    pub trim_input: bool,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            kind_matching: KindMatching::default(),
            trim_input: default_trim_input(),
            display: DisplayConfig::default(),
        }
    }
}

impl PricerConfig {
    /// Reference behaviour: `Option Price: $x.xx`, exact option-type match
    pub fn standard() -> Self {
        Self::default()
    }

    /// Accept any casing of `call` / `put`
    pub fn lenient() -> Self {
        Self {
            kind_matching: KindMatching::CaseInsensitive,
            ..Self::default()
        }
    }

    /// Six decimals for checking against reference tables
    pub fn precise() -> Self {
        Self {
            display: DisplayConfig {
                decimals: 6,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Parse a TOML document. Missing keys fall back to their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid pricer configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in config file {}", path.display()))
    }

    /// Serialise to TOML, e.g. to seed a config file.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialise pricer configuration")
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.decimals > MAX_DECIMALS {
            return Err(anyhow!(
                "display.decimals = {} exceeds the maximum of {}",
                self.display.decimals,
                MAX_DECIMALS
            ));
        }
        Ok(())
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> usize {
    2
}

fn default_price_label() -> String {
    "Option Price".to_string()
}

fn default_error_label() -> String {
    "Error".to_string()
}

fn default_trim_input() -> bool {
    true
}
