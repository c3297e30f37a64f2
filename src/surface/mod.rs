//! Render Surface
//!
//! The grid does not draw anything itself. On each redraw it emits
//! instructions to a [`RenderSurface`] in this order: column menu (only when
//! open), header, one call per row of the current page (or `empty`), pager.

pub mod text;

pub use text::TextSurface;

use crate::domain::Scalar;
use crate::grid::Column;

/// A visible column as the header should draw it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderCell<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub width: f32,
}

/// What to draw in a single cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellView<'a> {
    /// Plain value; `None` when the row lacks the field
    Display(Option<&'a Scalar>),
    /// Input box holding the pending value
    Editing(&'a Scalar),
}

/// One body row. `cells` line up with the header cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    /// Absolute row store index
    pub index: usize,
    /// Position on the current page
    pub slot: usize,
    pub cells: Vec<CellView<'a>>,
}

/// Pagination control state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerView {
    pub current_page: usize,
    pub total_pages: usize,
    pub can_previous: bool,
    pub can_next: bool,
    pub total_rows: usize,
}

/// Consumer of grid drawing instructions
pub trait RenderSurface {
    /// Column checklist, all columns in schema order
    fn column_menu(&mut self, _columns: &[Column]) {}

    fn header(&mut self, columns: &[HeaderCell<'_>]);

    fn row(&mut self, row: &RowView<'_>);

    /// Called instead of `row` when there is no data at all
    fn empty(&mut self) {}

    fn pager(&mut self, pager: &PagerView);
}
