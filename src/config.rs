use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_MONTH, MIN_DAY, MIN_MONTH};
use crate::types::max_days_in_month;

/// Settings for the built-in Brazilian holiday table.
///
/// ```toml
/// include_optional = false
///
/// [[extra]]
/// month = 1
/// day = 25
/// name = "Aniversário de São Paulo"
/// since = 1554
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayConfig {
    /// Include Carnaval (Monday and Tuesday) and Corpus Christi.
    #[serde(default = "default_true")]
    pub include_optional: bool,

    /// Fixed-date observances added on top of the national table.
    #[serde(default)]
    pub extra: Vec<ExtraHoliday>,
}

/// A holiday that falls on the same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraHoliday {
    pub month: u8,
    pub day: u8,
    pub name: String,
    /// First year the holiday is observed; every year when absent.
    #[serde(default)]
    pub since: Option<i32>,
}

impl ExtraHoliday {
    pub fn observed_in(&self, year: i32) -> bool {
        self.since.is_none_or(|since| year >= since)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("falha ao ler configuração {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuração inválida: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("feriado extra {name:?} com data inválida: {month:02}-{day:02}")]
    InvalidExtra { name: String, month: u8, day: u8 },
}

const fn default_true() -> bool {
    true
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            include_optional: true,
            extra: Vec::new(),
        }
    }
}

impl HolidayConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys and
    /// `ConfigError::InvalidExtra` for an extra holiday with an impossible date.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    ///
    /// # Errors
    /// Same as [`HolidayConfig::from_toml_str`], plus `ConfigError::Io`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            extra = config.extra.len(),
            include_optional = config.include_optional,
            "loaded holiday config"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for extra in &self.extra {
            let month_ok = (MIN_MONTH..=MAX_MONTH).contains(&extra.month);
            if !month_ok || extra.day < MIN_DAY || extra.day > max_days_in_month(extra.month) {
                return Err(ConfigError::InvalidExtra {
                    name: extra.name.clone(),
                    month: extra.month,
                    day: extra.day,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = HolidayConfig::from_toml_str("").unwrap();
        assert_eq!(config, HolidayConfig::default());
        assert!(config.include_optional);
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_extra_holidays() {
        let config = HolidayConfig::from_toml_str(
            r#"
            include_optional = false

            [[extra]]
            month = 1
            day = 25
            name = "Aniversário de São Paulo"

            [[extra]]
            month = 7
            day = 9
            name = "Revolução Constitucionalista"
            since = 1997
            "#,
        )
        .unwrap();

        assert!(!config.include_optional);
        assert_eq!(config.extra.len(), 2);
        assert!(config.extra[0].observed_in(1900));
        assert!(!config.extra[1].observed_in(1996));
        assert!(config.extra[1].observed_in(1997));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = HolidayConfig::from_toml_str("include_carnival = true");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_impossible_extra_dates() {
        for (month, day) in [(0, 1), (13, 1), (4, 31), (2, 30), (6, 0)] {
            let doc = format!("[[extra]]\nmonth = {month}\nday = {day}\nname = \"x\"\n");
            let result = HolidayConfig::from_toml_str(&doc);
            assert!(
                matches!(result, Err(ConfigError::InvalidExtra { .. })),
                "{month}-{day} should be rejected"
            );
        }
        // February 29 is accepted; it is skipped in common years
        let doc = "[[extra]]\nmonth = 2\nday = 29\nname = \"x\"\n";
        assert!(HolidayConfig::from_toml_str(doc).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let result = HolidayConfig::load("/nonexistent/brcal.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
