//! Grid Constants
//!
//! Centralized layout and paging constants shared by the grid core and surfaces.

/// Narrowest width a column may be resized to, in pixels
pub const MIN_COLUMN_WIDTH: f32 = 50.0;

/// Rows shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Approximate pixels per character cell for text surfaces
pub const PIXELS_PER_CHAR: f32 = 8.0;

/// Default config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "grid.toml";

/// Rows in the built-in demo dataset
pub const DEMO_ROW_COUNT: usize = 1000;

/// Widest column a text surface draws, in characters
pub const MAX_TEXT_COLUMN_CHARS: usize = 200;
