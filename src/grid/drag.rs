//! Drag Session
//!
//! Column resizing holds a global pointer move/up listener pair for the
//! duration of a drag. The host platform installs those listeners through
//! [`PointerCapture`] and routes the resulting events back into the grid.

use ahash::AHashSet;
use tracing::debug;

/// Handle for one acquired listener pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureId(u64);

impl CaptureId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Platform capability for global pointer tracking
pub trait PointerCapture {
    /// Install pointer move/up listeners
    fn acquire(&mut self) -> CaptureId;

    /// Remove the listeners. Unknown or already released ids are ignored.
    fn release(&mut self, id: CaptureId);

    /// Number of listener pairs currently installed
    fn active(&self) -> usize;
}

/// In-memory listener bookkeeping, for hosts that dispatch pointer events
/// themselves and for headless use.
#[derive(Debug, Default)]
pub struct ListenerSet {
    next_id: u64,
    live: AHashSet<CaptureId>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self, id: CaptureId) -> bool {
        self.live.contains(&id)
    }
}

impl PointerCapture for ListenerSet {
    fn acquire(&mut self) -> CaptureId {
        let id = CaptureId(self.next_id);
        self.next_id += 1;
        self.live.insert(id);
        debug!(id = id.0, "Pointer listeners installed");
        id
    }

    fn release(&mut self, id: CaptureId) {
        if self.live.remove(&id) {
            debug!(id = id.0, "Pointer listeners removed");
        }
    }

    fn active(&self) -> usize {
        self.live.len()
    }
}

/// A column resize in progress
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub column: String,
    pub start_x: f32,
    pub start_width: f32,
    pub capture: CaptureId,
}

impl DragSession {
    /// Requested width for a pointer at `x`; the registry applies the floor
    pub fn width_at(&self, x: f32) -> f32 {
        self.start_width + (x - self.start_x)
    }
}
