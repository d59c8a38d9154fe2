//! Config file loading (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::converter::PhoneticParser;
use crate::core::table::{PatternTable, TableError};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "AVRO_PHONETIC_CONFIG";

/// Parser settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Pattern table to use instead of the bundled Avro Phonetic table
    #[serde(default)]
    pub table_path: Option<String>,
    /// Lowercase uppercase letters that are not case-sensitive keys
    #[serde(default = "default_fold_case")]
    pub fold_case: bool,
}

fn default_fold_case() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            table_path: None,
            fold_case: default_fold_case(),
        }
    }
}

impl ParserConfig {
    /// Load the configured table; `None` means use the bundled one
    pub fn load_table(&self) -> Result<Option<PatternTable>, TableError> {
        match &self.table_path {
            Some(path) => PatternTable::load(path).map(Some),
            None => Ok(None),
        }
    }

    /// Apply these settings to a parser over `table`
    pub fn parser<'t>(&self, table: &'t PatternTable) -> PhoneticParser<'t> {
        PhoneticParser::new(table).with_fold_case(self.fold_case)
    }
}

/// Config file path: `$AVRO_PHONETIC_CONFIG`, else ~/.config/avro-phonetic/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // unset or unusable HOME: fall back to a writable system dir
            PathBuf::from("/var/tmp")
        });
    home.join(".config")
        .join("avro-phonetic")
        .join("config.json")
}

/// Load the config file (defaults when missing or unparsable)
pub fn load_config() -> ParserConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring invalid config {}: {}", path.display(), e);
            ParserConfig::default()
        }),
        Err(_) => ParserConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.table_path, None);
        assert!(config.fold_case);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = ParserConfig {
            table_path: Some("/usr/share/avro/custom.json".into()),
            fold_case: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ParserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ParserConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ParserConfig::default());

        let config: ParserConfig = serde_json::from_str(r#"{"fold_case": false}"#).unwrap();
        assert_eq!(config.table_path, None);
        assert!(!config.fold_case);
    }

    #[test]
    fn test_load_table_default_is_bundled() {
        let config = ParserConfig::default();
        assert!(config.load_table().unwrap().is_none());
    }

    #[test]
    fn test_load_table_missing_file() {
        let config = ParserConfig {
            table_path: Some("/nonexistent/table.json".into()),
            ..ParserConfig::default()
        };
        assert!(matches!(config.load_table(), Err(TableError::IoError(_))));
    }

    #[test]
    fn test_parser_respects_fold_case() {
        let table = PatternTable::avro();
        let folding = ParserConfig::default().parser(table);
        let exact = ParserConfig {
            fold_case: false,
            ..ParserConfig::default()
        }
        .parser(table);

        assert_eq!(folding.parse("Bhai"), "ভাই");
        assert_eq!(exact.parse("Bhai"), "Bহাই");
    }
}
