//! File System Utilities
//!
//! Configuration and data directory management.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "cyenx", "data-grid").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/data-grid/` or `$XDG_CONFIG_HOME/data-grid/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.data-grid/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\data-grid\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory (log files)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/data-grid/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.data-grid/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\data-grid\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}
