//! Receipt CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                    | Default |
//! |-----------------------------|---------|
//! | `SALESTAX_BASIC_RATE`       | 10      |
//! | `SALESTAX_IMPORT_DUTY_RATE` | 5       |
//! | `SALESTAX_ROUNDING_CENTS`   | 5       |

use std::env;

use salestax_core::TaxConfig;

pub const BASIC_RATE_VAR: &str = "SALESTAX_BASIC_RATE";
pub const IMPORT_DUTY_RATE_VAR: &str = "SALESTAX_IMPORT_DUTY_RATE";
pub const ROUNDING_CENTS_VAR: &str = "SALESTAX_ROUNDING_CENTS";

/// Receipt CLI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliConfig {
    pub tax: TaxConfig,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TaxConfig::default();

        let tax = TaxConfig {
            basic_rate_percent: read(&lookup, BASIC_RATE_VAR, defaults.basic_rate_percent)?,
            import_duty_rate_percent: read(
                &lookup,
                IMPORT_DUTY_RATE_VAR,
                defaults.import_duty_rate_percent,
            )?,
            rounding_increment_cents: read(
                &lookup,
                ROUNDING_CENTS_VAR,
                defaults.rounding_increment_cents,
            )?,
        };

        if tax.validate().is_err() {
            return Err(ConfigError::InvalidValue(ROUNDING_CENTS_VAR.to_string()));
        }

        Ok(CliConfig { tax })
    }
}

fn read<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.tax, TaxConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = CliConfig::from_lookup(lookup(&[
            (BASIC_RATE_VAR, "20"),
            (IMPORT_DUTY_RATE_VAR, " 0 "),
            (ROUNDING_CENTS_VAR, "1"),
        ]))
        .unwrap();

        assert_eq!(config.tax.basic_rate_percent, 20);
        assert_eq!(config.tax.import_duty_rate_percent, 0);
        assert_eq!(config.tax.rounding_increment_cents, 1);
    }

    #[test]
    fn test_rejects_unparseable_value() {
        let err = CliConfig::from_lookup(lookup(&[(BASIC_RATE_VAR, "ten")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue(BASIC_RATE_VAR.to_string()));
    }

    #[test]
    fn test_rejects_negative_rate() {
        let err = CliConfig::from_lookup(lookup(&[(IMPORT_DUTY_RATE_VAR, "-5")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue(IMPORT_DUTY_RATE_VAR.to_string()));
    }

    #[test]
    fn test_rejects_zero_rounding() {
        let err = CliConfig::from_lookup(lookup(&[(ROUNDING_CENTS_VAR, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue(ROUNDING_CENTS_VAR.to_string()));
    }

    #[test]
    fn test_rejects_rounding_too_large_for_centicents() {
        let vars = lookup(&[(ROUNDING_CENTS_VAR, "92233720368547759")]);
        let err = CliConfig::from_lookup(vars).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue(ROUNDING_CENTS_VAR.to_string()));
    }
}
