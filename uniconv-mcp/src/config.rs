//! Server configuration from environment variables

use std::env;
use thiserror::Error;
use uniconv_core::DisplayPrecision;
use uniconv_tools::DEFAULT_HISTORY_LIMIT;
use uniconv_units::{CatalogError, Category};

pub const PRECISION_VAR: &str = "UNICONV_PRECISION";
pub const HISTORY_LIMIT_VAR: &str = "UNICONV_HISTORY_LIMIT";
pub const DEFAULT_CATEGORY_VAR: &str = "UNICONV_DEFAULT_CATEGORY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("unit catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub precision: DisplayPrecision,
    pub history_limit: usize,
    pub default_category: Category,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            precision: DisplayPrecision::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_category: Category::Length,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from any variable source; unset or blank variables keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(PRECISION_VAR) {
            let digits: u32 = value
                .trim()
                .parse()
                .map_err(|_| invalid(PRECISION_VAR, &value, "expected an integer"))?;
            if !(DisplayPrecision::MIN..=DisplayPrecision::MAX).contains(&digits) {
                let range = format!(
                    "must be between {} and {}",
                    DisplayPrecision::MIN,
                    DisplayPrecision::MAX
                );
                return Err(invalid(PRECISION_VAR, &value, range));
            }
            config.precision = DisplayPrecision::new(digits);
        }

        if let Some(value) = get(HISTORY_LIMIT_VAR) {
            config.history_limit = value
                .trim()
                .parse()
                .map_err(|_| {
                    invalid(HISTORY_LIMIT_VAR, &value, "expected a non-negative integer")
                })?;
        }

        if let Some(value) = get(DEFAULT_CATEGORY_VAR) {
            config.default_category = value
                .parse()
                .map_err(|e: uniconv_core::ConversionError| {
                    invalid(DEFAULT_CATEGORY_VAR, &value, e.message)
                })?;
        }

        Ok(config)
    }
}

fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.precision.digits(), 6);
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.default_category, Category::Length);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            (PRECISION_VAR, "4"),
            (HISTORY_LIMIT_VAR, "0"),
            (DEFAULT_CATEGORY_VAR, "temperature"),
        ])
        .unwrap();
        assert_eq!(config.precision.digits(), 4);
        assert_eq!(config.history_limit, 0);
        assert_eq!(config.default_category, Category::Temperature);
    }

    #[test]
    fn test_blank_keeps_default() {
        let config = load(&[(PRECISION_VAR, "  ")]).unwrap();
        assert_eq!(config.precision.digits(), 6);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = load(&[(PRECISION_VAR, "0")]).unwrap_err();
        assert!(err.to_string().starts_with("UNICONV_PRECISION=\"0\""));

        let err = load(&[(PRECISION_VAR, "six")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: PRECISION_VAR, .. }));

        let err = load(&[(HISTORY_LIMIT_VAR, "-1")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: HISTORY_LIMIT_VAR, .. }));

        let err = load(&[(DEFAULT_CATEGORY_VAR, "Colour")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: DEFAULT_CATEGORY_VAR, .. }));
    }
}
