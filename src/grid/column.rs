//! Column Definition and Registry
//!
//! Defines grid columns and owns their layout state (width + visibility).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::MIN_COLUMN_WIDTH;
use crate::error::{Error, Result};

/// Column definition for the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column identifier, unique within a grid
    pub key: String,
    /// Column header label
    pub label: String,
    /// Column width in pixels
    pub width: f32,
    /// Whether the column is shown
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Column {
    /// Create a new visible column
    pub fn new(key: impl Into<String>, label: impl Into<String>, width: f32) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width,
            visible: true,
        }
    }

    /// Start hidden
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Clamp a requested width to the column floor. Non-finite requests
/// (NaN, infinities) land on the floor.
pub fn clamp_width(width: f32) -> f32 {
    if !width.is_finite() {
        return MIN_COLUMN_WIDTH;
    }
    width.max(MIN_COLUMN_WIDTH)
}

/// Ordered set of columns; order is the schema order and never changes.
#[derive(Debug, Clone, Default)]
pub struct ColumnRegistry {
    columns: Vec<Column>,
}

impl ColumnRegistry {
    /// Build the registry from a schema. Keys must be unique.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = ahash::AHashSet::with_capacity(columns.len());
        for col in &columns {
            if !seen.insert(col.key.as_str()) {
                return Err(Error::Invalid {
                    message: format!("duplicate column key '{}'", col.key),
                });
            }
        }

        let columns = columns
            .into_iter()
            .map(|mut col| {
                if col.width < MIN_COLUMN_WIDTH || !col.width.is_finite() {
                    warn!(key = %col.key, width = col.width, "Column width below floor, clamping");
                    col.width = clamp_width(col.width);
                }
                col
            })
            .collect();

        Ok(Self { columns })
    }

    /// All columns in schema order, hidden ones included
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.key == key)
    }

    /// Set visibility. Unknown keys are ignored.
    pub fn set_visibility(&mut self, key: &str, visible: bool) {
        match self.get_mut(key) {
            Some(col) => {
                col.visible = visible;
                debug!(key, visible, "Column visibility set");
            }
            None => debug!(key, "Ignoring visibility change for unknown column"),
        }
    }

    /// Flip visibility. Unknown keys are ignored.
    pub fn toggle(&mut self, key: &str) {
        if let Some(visible) = self.get(key).map(|c| !c.visible) {
            self.set_visibility(key, visible);
        } else {
            debug!(key, "Ignoring toggle for unknown column");
        }
    }

    /// Set width to `max(width, MIN_COLUMN_WIDTH)`. Unknown keys are ignored.
    pub fn set_width(&mut self, key: &str, width: f32) {
        let Some(col) = self.get_mut(key) else {
            debug!(key, "Ignoring resize for unknown column");
            return;
        };
        col.width = clamp_width(width);
        debug!(key, requested = width, width = col.width, "Column resized");
    }

    /// Visible columns, preserving schema order
    pub fn visible(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ColumnRegistry {
        ColumnRegistry::new(vec![
            Column::new("id", "ID", 100.0),
            Column::new("name", "Name", 200.0),
            Column::new("email", "Email", 250.0),
        ])
        .expect("unique keys")
    }

    fn visible_keys(reg: &ColumnRegistry) -> Vec<&str> {
        reg.visible().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let result = ColumnRegistry::new(vec![
            Column::new("id", "ID", 100.0),
            Column::new("id", "Other", 100.0),
        ]);
        assert!(matches!(result, Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_empty_schema() {
        let reg = ColumnRegistry::new(Vec::new()).expect("no keys to clash");
        assert!(reg.is_empty());
        assert_eq!(reg.visible().count(), 0);
        assert!(!registry().is_empty());
    }

    #[test]
    fn test_initial_width_clamped() {
        let reg = ColumnRegistry::new(vec![Column::new("a", "A", 10.0)]).expect("unique keys");
        assert_eq!(reg.columns()[0].width, MIN_COLUMN_WIDTH);
    }

    #[test]
    fn test_hide_preserves_order() {
        let mut reg = registry();
        reg.set_visibility("name", false);
        assert_eq!(visible_keys(&reg), vec!["id", "email"]);
        reg.set_visibility("name", true);
        assert_eq!(visible_keys(&reg), vec!["id", "name", "email"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut reg = registry();
        reg.toggle("email");
        assert!(!reg.get("email").expect("exists").visible);
        reg.toggle("email");
        assert!(reg.get("email").expect("exists").visible);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut reg = registry();
        let before = reg.columns().to_vec();
        reg.toggle("nope");
        reg.set_visibility("nope", false);
        reg.set_width("nope", 500.0);
        assert_eq!(reg.columns(), before.as_slice());
    }

    #[test]
    fn test_width_floor() {
        let mut reg = registry();
        reg.set_width("id", 30.0);
        assert_eq!(reg.get("id").expect("exists").width, 50.0);
        reg.set_width("id", -10.0);
        assert_eq!(reg.get("id").expect("exists").width, 50.0);
        reg.set_width("id", f32::NAN);
        assert_eq!(reg.get("id").expect("exists").width, 50.0);
        reg.set_width("id", f32::INFINITY);
        assert_eq!(reg.get("id").expect("exists").width, 50.0);
        reg.set_width("id", f32::NEG_INFINITY);
        assert_eq!(reg.get("id").expect("exists").width, 50.0);
        reg.set_width("id", 180.0);
        assert_eq!(reg.get("id").expect("exists").width, 180.0);
    }
}
