//! Utilities

pub mod config_store;

pub use config_store::{default_config_path, demo_rows, load_config, load_rows};
