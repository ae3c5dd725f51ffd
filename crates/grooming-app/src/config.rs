//! Configuration management for grooming-pricer
//!
//! Config stored at: ~/.config/grooming-pricer/config.json

use crate::constants::DEFAULT_WEIGHT_KG;
use grooming_types::{ConfigError, OutputFormat, PricingMode, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file (TOML or JSON). Built-in catalog when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Translations JSON providing `booking.timeSlots`
    #[serde(default)]
    pub translations_path: Option<PathBuf>,

    /// Pet weight used when a command does not specify one
    #[serde(default = "default_weight_kg")]
    pub default_weight_kg: f64,

    /// Lenient (reference) or strict pricing
    #[serde(default)]
    pub pricing_mode: PricingMode,

    /// Default output format (table, json, csv)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Prefix used when rendering prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_weight_kg() -> f64 {
    DEFAULT_WEIGHT_KG
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            translations_path: None,
            default_weight_kg: default_weight_kg(),
            pricing_mode: PricingMode::default(),
            output_format: OutputFormat::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("grooming-pricer");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grooming Pricer Configuration")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Catalog:        {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Translations:   {}",
            self.translations_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Default weight: {} kg", self.default_weight_kg)?;
        writeln!(f, "Pricing mode:   {}", self.pricing_mode)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Currency:       {}", self.currency_symbol)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
