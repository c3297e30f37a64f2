//! DataGrid - Grid Controller
//!
//! Composes columns, rows, the edit session and pagination into the single
//! source of truth a render surface reads from. Everything a surface shows
//! is derived on read; nothing derived is cached.
//!
//! Row positions coming from the surface are page-relative ("slots"). They
//! are translated to absolute row store indices here and nowhere else.

use tracing::{debug, info, warn};

use super::column::{Column, ColumnRegistry};
use super::drag::{DragSession, ListenerSet, PointerCapture};
use super::edit_session::{EditSession, EditTarget};
use super::pagination::Pagination;
use super::row_store::{IndexedRow, RowStore};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::{GridConfig, Row, Scalar};
use crate::error::{Error, Result};
use crate::helpers::GridAction;
use crate::surface::{CellView, HeaderCell, PagerView, RenderSurface, RowView};

/// Paginated, editable, resizable grid state
#[derive(Debug)]
pub struct DataGrid<P: PointerCapture = ListenerSet> {
    columns: ColumnRegistry,
    rows: RowStore,
    edit: EditSession,
    pagination: Pagination,
    capture: P,
    drag: Option<DragSession>,
    column_menu_open: bool,
}

impl DataGrid<ListenerSet> {
    /// Create a grid with the default page size and in-memory pointer capture
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self> {
        Self::with_capture(columns, rows, ListenerSet::new())
    }

    /// Create a grid from configuration
    pub fn from_config(config: &GridConfig, rows: Vec<Row>) -> Result<Self> {
        Ok(Self::new(config.columns.clone(), rows)?.page_size(config.page_size))
    }
}

impl<P: PointerCapture> DataGrid<P> {
    /// Create a grid using a platform pointer capture
    pub fn with_capture(columns: Vec<Column>, rows: Vec<Row>, capture: P) -> Result<Self> {
        let columns = ColumnRegistry::new(columns)?;
        if columns.is_empty() {
            warn!("Grid has no columns; rows will render blank");
        }
        info!(
            columns = columns.len(),
            rows = rows.len(),
            "Grid initialized"
        );
        Ok(Self {
            columns,
            rows: RowStore::new(rows),
            edit: EditSession::default(),
            pagination: Pagination::new(DEFAULT_PAGE_SIZE),
            capture,
            drag: None,
            column_menu_open: false,
        })
    }

    /// Set the page size; resets to page 1
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.pagination = Pagination::new(page_size);
        self
    }

    // ==================== Derived view ====================

    /// Visible columns in schema order
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.columns.visible().collect()
    }

    /// All columns, for the "Customize Columns" menu
    pub fn column_options(&self) -> &[Column] {
        self.columns.columns()
    }

    /// Rows of the current page with their absolute indices
    pub fn current_page_rows(&self) -> Vec<IndexedRow<'_>> {
        let range = self.pagination.page_range(self.rows.row_count());
        self.rows.page(range).collect()
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.total_pages(self.rows.row_count())
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination.can_previous()
    }

    pub fn can_next_page(&self) -> bool {
        self.pagination.can_next(self.rows.row_count())
    }

    pub fn total_rows(&self) -> usize {
        self.rows.row_count()
    }

    /// Row by absolute index
    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows.get_row(index)
    }

    /// Cell value by absolute row index; `None` for missing rows or fields
    pub fn cell(&self, index: usize, key: &str) -> Option<&Scalar> {
        self.rows.get_row(index).ok().and_then(|row| row.get(key))
    }

    /// Is the cell at absolute `index` under edit
    pub fn is_editing(&self, index: usize, key: &str) -> bool {
        self.edit.is_editing(index, key)
    }

    pub fn editing(&self) -> Option<&EditTarget> {
        self.edit.target()
    }

    pub fn pending_value(&self) -> Option<&Scalar> {
        self.edit.pending()
    }

    pub fn column_menu_open(&self) -> bool {
        self.column_menu_open
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    pub fn capture(&self) -> &P {
        &self.capture
    }

    pub fn pager(&self) -> PagerView {
        let row_count = self.rows.row_count();
        PagerView {
            current_page: self.pagination.current_page(),
            total_pages: self.pagination.total_pages(row_count),
            can_previous: self.pagination.can_previous(),
            can_next: self.pagination.can_next(row_count),
            total_rows: row_count,
        }
    }

    // ==================== Columns ====================

    pub fn toggle_column(&mut self, key: &str) {
        self.columns.toggle(key);
    }

    pub fn set_column_visibility(&mut self, key: &str, visible: bool) {
        self.columns.set_visibility(key, visible);
    }

    pub fn resize_column(&mut self, key: &str, width: f32) {
        self.columns.set_width(key, width);
    }

    pub fn toggle_column_menu(&mut self) {
        self.column_menu_open = !self.column_menu_open;
    }

    // ==================== Drag resize ====================

    /// Pointer pressed on `key`'s resize handle at `pointer_x`.
    /// Unknown keys are ignored; a drag already running is ended first.
    pub fn begin_column_resize(&mut self, key: &str, pointer_x: f32) {
        let Some(start_width) = self.columns.get(key).map(|c| c.width) else {
            debug!(key, "Ignoring resize drag on unknown column");
            return;
        };

        self.end_column_resize();
        let capture = self.capture.acquire();
        self.drag = Some(DragSession {
            column: key.to_string(),
            start_x: pointer_x,
            start_width,
            capture,
        });
    }

    /// Pointer moved during a resize drag
    pub fn drag_column_to(&mut self, pointer_x: f32) {
        if let Some(drag) = &self.drag {
            self.columns.set_width(&drag.column, drag.width_at(pointer_x));
        }
    }

    /// Pointer released; safe to call when no drag is active
    pub fn end_column_resize(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.capture.release(drag.capture);
        }
    }

    // ==================== Editing ====================

    /// Absolute index of the row at `slot` on the current page, checking
    /// that `key` names a column
    fn resolve_target(&self, slot: usize, key: &str) -> Result<usize> {
        let range = self.pagination.page_range(self.rows.row_count());
        let index = range.start + slot;
        if index >= range.end || !self.columns.contains(key) {
            return Err(Error::InvalidTarget {
                row: index,
                column: key.to_string(),
            });
        }
        Ok(index)
    }

    /// Start editing the cell at page-relative `slot`. Any edit in progress
    /// is dropped without saving.
    pub fn start_cell_edit(&mut self, slot: usize, key: &str, initial: impl Into<Scalar>) -> Result<()> {
        let index = self.resolve_target(slot, key)?;
        self.edit.start(EditTarget::new(index, key), initial.into());
        Ok(())
    }

    /// Start editing with the cell's current value (blank when absent)
    pub fn begin_cell_edit(&mut self, slot: usize, key: &str) -> Result<()> {
        let index = self.resolve_target(slot, key)?;
        let initial = self.cell(index, key).cloned().unwrap_or_default();
        self.edit.start(EditTarget::new(index, key), initial);
        Ok(())
    }

    /// Returns `false` when no edit is active
    pub fn update_pending_value(&mut self, value: impl Into<Scalar>) -> bool {
        self.edit.set_pending(value.into())
    }

    /// Save the pending value. Returns the committed target, `None` when idle.
    pub fn commit_cell_edit(&mut self) -> Result<Option<EditTarget>> {
        self.edit.commit(&mut self.rows)
    }

    pub fn cancel_cell_edit(&mut self) {
        self.edit.cancel();
    }

    // ==================== Paging ====================

    /// Go to page `page`, clamped into range
    pub fn set_page(&mut self, page: usize) {
        self.pagination.go_to(page, self.rows.row_count());
    }

    pub fn next_page(&mut self) {
        self.pagination.next(self.rows.row_count());
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    // ==================== Intents ====================

    /// Apply a user intent
    pub fn dispatch(&mut self, action: GridAction) -> Result<()> {
        debug!(?action, "Dispatching");
        match action {
            GridAction::ToggleColumn { key } => self.toggle_column(&key),
            GridAction::SetColumnVisibility { key, visible } => {
                self.set_column_visibility(&key, visible)
            }
            GridAction::ResizeColumn { key, width } => self.resize_column(&key, width),
            GridAction::BeginResize { key, x } => self.begin_column_resize(&key, x),
            GridAction::DragTo { x } => self.drag_column_to(x),
            GridAction::EndResize => self.end_column_resize(),
            GridAction::StartEdit {
                slot,
                key,
                initial: Some(initial),
            } => self.start_cell_edit(slot, &key, initial)?,
            GridAction::StartEdit {
                slot,
                key,
                initial: None,
            } => self.begin_cell_edit(slot, &key)?,
            GridAction::UpdatePending { value } => {
                self.update_pending_value(value);
            }
            GridAction::CommitEdit => {
                self.commit_cell_edit()?;
            }
            GridAction::CancelEdit => self.cancel_cell_edit(),
            GridAction::SetPage { page } => self.set_page(page),
            GridAction::NextPage => self.next_page(),
            GridAction::PreviousPage => self.previous_page(),
            GridAction::ToggleColumnMenu => self.toggle_column_menu(),
        }
        Ok(())
    }

    // ==================== Rendering ====================

    /// Emit drawing instructions for the current state
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        if self.column_menu_open {
            surface.column_menu(self.columns.columns());
        }

        let visible = self.visible_columns();
        let header: Vec<HeaderCell<'_>> = visible
            .iter()
            .map(|c| HeaderCell {
                key: &c.key,
                label: &c.label,
                width: c.width,
            })
            .collect();
        surface.header(&header);

        if self.rows.is_empty() {
            surface.empty();
        } else {
            for (slot, IndexedRow { index, row }) in self.current_page_rows().into_iter().enumerate() {
                let cells = visible
                    .iter()
                    .map(|col| match self.edit.pending() {
                        Some(pending) if self.edit.is_editing(index, &col.key) => {
                            CellView::Editing(pending)
                        }
                        _ => CellView::Display(row.get(&col.key)),
                    })
                    .collect();
                surface.row(&RowView { index, slot, cells });
            }
        }

        surface.pager(&self.pager());
    }
}

impl<P: PointerCapture> Drop for DataGrid<P> {
    fn drop(&mut self) {
        self.end_column_resize();
    }
}
