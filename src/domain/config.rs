//! Config - Grid Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::grid::Column;
use crate::i18n::Locale;

/// Main grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Rows per page
    pub page_size: usize,
    /// Label language
    pub locale: Locale,
    /// Column schema, in display order
    pub columns: Vec<Column>,
    /// JSON file holding an array of row objects (demo data when absent)
    pub data: Option<PathBuf>,
    /// Logging options
    pub log: LogConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::default(),
            columns: vec![
                Column::new("id", "ID", 100.0),
                Column::new("name", "Name", 200.0),
                Column::new("email", "Email", 250.0),
            ],
            data: None,
            log: LogConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Also write a daily rolling log file into the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GridConfig = toml::from_str(
            r#"
            page_size = 25
            locale = "zh-CN"

            [[columns]]
            key = "sku"
            label = "SKU"
            width = 120.0

            [[columns]]
            key = "qty"
            label = "Qty"
            width = 20.0
            visible = false
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.page_size, 25);
        assert_eq!(config.locale, Locale::ZhCN);
        assert_eq!(config.columns.len(), 2);
        assert!(config.columns[0].visible);
        assert!(!config.columns[1].visible);
        assert_eq!(config.log.level, "info");
        assert!(config.data.is_none());
    }

    #[test]
    fn test_default_schema_matches_demo() {
        let keys: Vec<_> = GridConfig::default()
            .columns
            .iter()
            .map(|c| c.key.clone())
            .collect();
        assert_eq!(keys, vec!["id", "name", "email"]);
    }
}
