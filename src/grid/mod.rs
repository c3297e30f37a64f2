//! Grid - Core State Machine
//!
//! Column layout, row data, cell editing and pagination for the data grid.

pub mod column;
pub mod controller;
pub mod drag;
pub mod edit_session;
pub mod pagination;
pub mod row_store;

pub use column::{Column, ColumnRegistry};
pub use controller::DataGrid;
pub use drag::{CaptureId, DragSession, ListenerSet, PointerCapture};
pub use edit_session::{EditSession, EditTarget};
pub use pagination::{Pagination, page_count, page_slice};
pub use row_store::{IndexedRow, RowStore};
