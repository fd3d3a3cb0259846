//! Configuration management for cargas-frete
//!
//! Config stored at: ~/.config/cargas-frete/config.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use cargas_types::{CargoClass, ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default cargo classification for quotes
    #[serde(default)]
    pub default_cargo_class: CargoClass,

    /// Default axle count when none is given
    #[serde(default = "default_axles")]
    pub default_axles: u8,

    /// Default profit margin, whole-number percent
    #[serde(default = "default_profit_margin")]
    pub default_profit_margin_percent: f64,

    /// Default ad-valorem rate, whole-number percent
    #[serde(default)]
    pub default_ad_valorem_percent: f64,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_axles() -> u8 {
    6
}

fn default_profit_margin() -> f64 {
    20.0
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_cargo_class: CargoClass::default(),
            default_axles: default_axles(),
            default_profit_margin_percent: default_profit_margin(),
            default_ad_valorem_percent: 0.0,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("cargas-frete");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cargas Frete Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Default cargo:       {}",
            self.default_cargo_class.label()
        )?;
        writeln!(f, "Default axles:       {}", self.default_axles)?;
        writeln!(
            f,
            "Default margin:      {}%",
            self.default_profit_margin_percent
        )?;
        writeln!(
            f,
            "Default ad valorem:  {}%",
            self.default_ad_valorem_percent
        )?;
        writeln!(f, "Output format:       {}", self.output_format)?;
        writeln!(
            f,
            "Config file:         {}",
            Self::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_calculator_form() {
        let config = Config::default();
        assert_eq!(config.default_cargo_class, CargoClass::General);
        assert_eq!(config.default_axles, 6);
        assert_eq!(config.default_profit_margin_percent, 20.0);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{"default_axles": 9}"#).unwrap();
        assert_eq!(config.default_axles, 9);
        assert_eq!(config.default_profit_margin_percent, 20.0);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_round_trip() {
        let mut config = Config::default();
        config.default_cargo_class = CargoClass::Dangerous;
        config.output_format = OutputFormat::Json;
        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.default_cargo_class, CargoClass::Dangerous);
        assert_eq!(restored.output_format, OutputFormat::Json);
    }
}
