//! ConfigStore - Configuration and Dataset Loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::{GridConfig, Row};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Default config file location
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load a TOML config file; a missing file yields the defaults
pub fn load_config(path: &Path) -> Result<GridConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(GridConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: GridConfig = toml::from_str(&content)?;
    info!(path = %path.display(), "Config loaded");
    Ok(config)
}

/// Load a JSON array of row objects
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let content = fs::read_to_string(path)?;
    let rows: Vec<Row> = serde_json::from_str(&content)?;
    info!(path = %path.display(), rows = rows.len(), "Dataset loaded");
    Ok(rows)
}

/// Built-in dataset: `count` users with id, name and email
pub fn demo_rows(count: usize) -> Vec<Row> {
    (1..=count)
        .map(|i| {
            Row::new()
                .with("id", i)
                .with("name", format!("User {i}"))
                .with("email", format!("user{i}@example.com"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Scalar;
    use crate::error::Error;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config.page_size, GridConfig::default().page_size);
    }

    #[test]
    fn test_bad_config_reports_toml_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("grid.toml");
        fs::write(&path, "page_size = \"ten\"").expect("write");
        assert!(matches!(load_config(&path), Err(Error::TomlDe { .. })));
    }

    #[test]
    fn test_load_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rows.json");
        fs::write(&path, r#"[{"id": 1, "name": "a"}, {"id": 2}]"#).expect("write");
        let rows = load_rows(&path).expect("valid rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("name"), None);
        assert_eq!(rows[0].get("id"), Some(&Scalar::from(1)));
    }

    #[test]
    fn test_demo_rows() {
        let rows = demo_rows(3);
        assert_eq!(rows[2].get("email"), Some(&Scalar::from("user3@example.com")));
    }
}
