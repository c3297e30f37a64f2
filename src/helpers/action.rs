//! Grid Actions
//!
//! User intents understood by the grid controller, plus the console syntax
//! the bundled binary accepts for them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Scalar;
use crate::error::Error;

/// A single user intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GridAction {
    /// Flip a column's visibility
    ToggleColumn { key: String },
    /// Set a column's visibility explicitly
    SetColumnVisibility { key: String, visible: bool },
    /// Set a column width (floored at the minimum)
    ResizeColumn { key: String, width: f32 },
    /// Pointer pressed on a column's resize handle
    BeginResize { key: String, x: f32 },
    /// Pointer moved while resizing
    DragTo { x: f32 },
    /// Pointer released
    EndResize,
    /// Start editing a cell on the current page; `slot` is page-relative.
    /// Without `initial` the current cell value is used.
    StartEdit {
        slot: usize,
        key: String,
        #[serde(default)]
        initial: Option<Scalar>,
    },
    /// Replace the buffered edit value
    UpdatePending { value: Scalar },
    /// Save the buffered value
    CommitEdit,
    /// Drop the buffered value
    CancelEdit,
    /// Jump to a page (clamped)
    SetPage { page: usize },
    NextPage,
    PreviousPage,
    /// Open/close the "Customize Columns" menu
    ToggleColumnMenu,
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Invalid {
        message: message.into(),
    }
}

fn arg<'a>(parts: &[&'a str], index: usize, name: &str) -> Result<&'a str, Error> {
    parts
        .get(index)
        .copied()
        .ok_or_else(|| invalid(format!("missing {name}")))
}

fn number<T: FromStr>(parts: &[&str], index: usize, name: &str) -> Result<T, Error> {
    let raw = arg(parts, index, name)?;
    raw.parse()
        .map_err(|_| invalid(format!("{name} must be a number, got '{raw}'")))
}

impl FromStr for GridAction {
    type Err = Error;

    /// Parse console syntax, e.g. `toggle email`, `page 3`, `type new@x.com`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Err(invalid("empty command"));
        };

        let action = match command {
            "toggle" => GridAction::ToggleColumn {
                key: arg(&parts, 1, "column key")?.to_string(),
            },
            "show" | "hide" => GridAction::SetColumnVisibility {
                key: arg(&parts, 1, "column key")?.to_string(),
                visible: command == "show",
            },
            "resize" => GridAction::ResizeColumn {
                key: arg(&parts, 1, "column key")?.to_string(),
                width: number(&parts, 2, "width")?,
            },
            "press" => GridAction::BeginResize {
                key: arg(&parts, 1, "column key")?.to_string(),
                x: number(&parts, 2, "x")?,
            },
            "move" => GridAction::DragTo {
                x: number(&parts, 1, "x")?,
            },
            "release" => GridAction::EndResize,
            "edit" => GridAction::StartEdit {
                slot: number(&parts, 1, "row slot")?,
                key: arg(&parts, 2, "column key")?.to_string(),
                initial: None,
            },
            "type" => {
                // Everything after the command word, spaces included
                let value = line
                    .strip_prefix("type")
                    .map(str::trim_start)
                    .unwrap_or_default();
                GridAction::UpdatePending {
                    value: Scalar::parse_input(value),
                }
            }
            "save" => GridAction::CommitEdit,
            "cancel" => GridAction::CancelEdit,
            "page" => GridAction::SetPage {
                page: number(&parts, 1, "page")?,
            },
            "next" => GridAction::NextPage,
            "prev" | "previous" => GridAction::PreviousPage,
            "menu" => GridAction::ToggleColumnMenu,
            other => return Err(invalid(format!("unknown command '{other}'"))),
        };

        Ok(action)
    }
}
