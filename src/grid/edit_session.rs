//! Edit Session
//!
//! Single-slot state machine for in-place cell editing. At most one cell is
//! being edited; starting another edit drops the pending value of the
//! previous one without saving it.

use tracing::{debug, warn};

use super::row_store::RowStore;
use crate::domain::Scalar;
use crate::error::{Error, Result};

/// The cell being edited. `row` is an absolute row store index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditTarget {
    pub row: usize,
    pub column: String,
}

impl EditTarget {
    pub fn new(row: usize, column: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
        }
    }
}

/// Edit state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { target: EditTarget, pending: Scalar },
}

impl EditSession {
    /// Enter `Editing`. Returns the edit that was abandoned, if any.
    ///
    /// Callers validate the target before starting.
    pub fn start(&mut self, target: EditTarget, initial: Scalar) -> Option<(EditTarget, Scalar)> {
        debug!(row = target.row, column = %target.column, "Edit started");
        let displaced = self.take();
        if let Some((prev, _)) = &displaced {
            debug!(row = prev.row, column = %prev.column, "Previous edit dropped without saving");
        }
        *self = EditSession::Editing {
            target,
            pending: initial,
        };
        displaced
    }

    /// Buffer a new value. Returns `false` when idle.
    pub fn set_pending(&mut self, value: Scalar) -> bool {
        match self {
            EditSession::Editing { pending, .. } => {
                *pending = value;
                true
            }
            EditSession::Idle => {
                debug!("Ignoring pending value while idle");
                false
            }
        }
    }

    /// Write the pending value into `rows` and return to `Idle`.
    ///
    /// Idle commits are a no-op. A target whose row has disappeared yields
    /// `StaleTarget`; the edit is discarded either way.
    pub fn commit(&mut self, rows: &mut RowStore) -> Result<Option<EditTarget>> {
        let Some((target, pending)) = self.take() else {
            return Ok(None);
        };

        match rows.set_field(target.row, &target.column, pending) {
            Ok(_) => {
                debug!(row = target.row, column = %target.column, "Edit committed");
                Ok(Some(target))
            }
            Err(Error::OutOfRange { .. }) => {
                warn!(row = target.row, column = %target.column, "Edit target is stale, discarding");
                Err(Error::StaleTarget {
                    row: target.row,
                    column: target.column,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Drop the pending value and return to `Idle`
    pub fn cancel(&mut self) -> Option<EditTarget> {
        let cancelled = self.take().map(|(target, _)| target);
        if let Some(target) = &cancelled {
            debug!(row = target.row, column = %target.column, "Edit cancelled");
        }
        cancelled
    }

    fn take(&mut self) -> Option<(EditTarget, Scalar)> {
        match std::mem::take(self) {
            EditSession::Editing { target, pending } => Some((target, pending)),
            EditSession::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }

    pub fn target(&self) -> Option<&EditTarget> {
        match self {
            EditSession::Editing { target, .. } => Some(target),
            EditSession::Idle => None,
        }
    }

    pub fn pending(&self) -> Option<&Scalar> {
        match self {
            EditSession::Editing { pending, .. } => Some(pending),
            EditSession::Idle => None,
        }
    }

    /// Is `(row, column)` the cell under edit
    pub fn is_editing(&self, row: usize, column: &str) -> bool {
        self.target()
            .is_some_and(|t| t.row == row && t.column == column)
    }
}
