//! Lattice configuration
//!
//! Configuration is layered: defaults, then an optional TOML file, then
//! `LATTICES_*` environment variables. Every layer is validated before use.

use crate::errors::{LatticeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LATTICES_";

/// Default per-level label separators
pub const DEFAULT_SYMBOLS: [&str; 3] = ["•", "꞉", "⋮"];

/// Default rendering of the empty set
pub const DEFAULT_EMPTY_SYMBOL: &str = "∅";

/// Construction and presentation settings for a lattice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    /// Label separators, outermost nesting level first
    pub symbols: Vec<String>,
    /// Label used for the empty set
    pub empty_symbol: String,
    /// Reject relations where both `le(a, b)` and `le(b, a)` hold for `a ≠ b`.
    /// When false, the direction checked first wins.
    pub strict_antisymmetry: bool,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            empty_symbol: DEFAULT_EMPTY_SYMBOL.to_string(),
            strict_antisymmetry: true,
        }
    }
}

impl LatticeConfig {
    /// Default configuration with custom label separators
    pub fn with_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Split a separator string into one separator per character, the compact
    /// form used on the command line and in the environment (`"•꞉⋮"`).
    pub fn symbols_from_str(symbols: &str) -> Vec<String> {
        symbols.chars().map(String::from).collect()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LatticeError::config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge `LATTICES_*` variables from the process environment
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Merge `LATTICES_*` entries from an explicit variable list
    pub fn merge_with_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let Some(key) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.as_ref();
            match key {
                "SYMBOLS" => self.symbols = Self::symbols_from_str(value),
                "EMPTY_SYMBOL" => self.empty_symbol = value.to_string(),
                "STRICT_ANTISYMMETRY" => {
                    self.strict_antisymmetry = value.trim().parse().map_err(|_| {
                        LatticeError::config(format!(
                            "{ENV_PREFIX}STRICT_ANTISYMMETRY must be true or false, got '{value}'"
                        ))
                    })?;
                }
                other => {
                    tracing::debug!(key = %other, "Ignoring unknown lattices environment key");
                }
            }
        }
        self.validate()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.empty_symbol.is_empty() {
            return Err(LatticeError::config("empty_symbol must not be empty"));
        }
        for (i, symbol) in self.symbols.iter().enumerate() {
            if self.symbols[..i].contains(symbol) {
                return Err(LatticeError::config(format!(
                    "label separator '{symbol}' is used for more than one level"
                )));
            }
        }
        Ok(())
    }
}
