//! Plain-text render surface
//!
//! Draws the grid as fixed-width text, one character per
//! [`PIXELS_PER_CHAR`] pixels of column width.

use super::{CellView, HeaderCell, PagerView, RenderSurface, RowView};
use crate::constants::{MAX_TEXT_COLUMN_CHARS, PIXELS_PER_CHAR};
use crate::grid::Column;
use crate::i18n::{self, Locale};

const SEPARATOR: &str = " | ";

/// Text surface accumulating one frame at a time
#[derive(Debug, Default)]
pub struct TextSurface {
    locale: Locale,
    widths: Vec<usize>,
    out: String,
}

impl TextSurface {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            widths: Vec::new(),
            out: String::new(),
        }
    }

    /// The frame drawn so far
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take the frame and start a new one
    pub fn take_frame(&mut self) -> String {
        self.widths.clear();
        std::mem::take(&mut self.out)
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn push_line(&mut self, cells: impl IntoIterator<Item = String>) {
        let line = cells
            .into_iter()
            .zip(&self.widths)
            .map(|(text, &width)| fit(&text, width))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        self.line(line.trim_end());
    }
}

/// Characters available for a column `width` pixels wide, capped at
/// [`MAX_TEXT_COLUMN_CHARS`]
fn chars_for(width: f32) -> usize {
    if !width.is_finite() {
        return MAX_TEXT_COLUMN_CHARS;
    }
    ((width / PIXELS_PER_CHAR).floor() as usize).clamp(1, MAX_TEXT_COLUMN_CHARS)
}

/// Pad or truncate `text` to exactly `width` characters
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let mut padded = String::with_capacity(width);
        padded.push_str(text);
        padded.push_str(&" ".repeat(width - len));
        padded
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

impl RenderSurface for TextSurface {
    fn column_menu(&mut self, columns: &[Column]) {
        let title = i18n::tr(self.locale, "grid.customize_columns");
        self.line(&format!("{title} ▼"));
        for col in columns {
            let mark = if col.visible { 'x' } else { ' ' };
            self.line(&format!("  [{mark}] {}", col.label));
        }
        self.line("");
    }

    fn header(&mut self, columns: &[HeaderCell<'_>]) {
        self.widths = columns.iter().map(|c| chars_for(c.width)).collect();
        self.push_line(columns.iter().map(|c| c.label.to_string()));
        let rule = self
            .widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-");
        self.line(&rule);
    }

    fn row(&mut self, row: &RowView<'_>) {
        self.push_line(row.cells.iter().map(|cell| match cell {
            CellView::Display(Some(value)) => value.to_string(),
            CellView::Display(None) => String::new(),
            CellView::Editing(pending) => format!("[{pending}_]"),
        }));
    }

    fn empty(&mut self) {
        let text = i18n::tr(self.locale, "grid.no_data");
        self.line(&text);
    }

    fn pager(&mut self, pager: &PagerView) {
        let button = |label: String, enabled: bool| {
            if enabled {
                format!("[{label}]")
            } else {
                format!("({label})")
            }
        };
        let previous = button(i18n::tr(self.locale, "grid.previous"), pager.can_previous);
        let next = button(i18n::tr(self.locale, "grid.next"), pager.can_next);
        let page = i18n::page_of(self.locale, pager.current_page, pager.total_pages);
        let items = i18n::item_count(self.locale, pager.total_rows);
        self.line("");
        self.line(&format!("{items}    {previous}  {page}  {next}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abcd", 4), "abcd");
    }

    #[test]
    fn test_chars_for_width() {
        assert_eq!(chars_for(100.0), 12);
        assert_eq!(chars_for(50.0), 6);
        assert_eq!(chars_for(1.0), 1);
    }

    #[test]
    fn test_chars_for_is_bounded() {
        assert_eq!(chars_for(1.0e6), MAX_TEXT_COLUMN_CHARS);
        assert_eq!(chars_for(f32::INFINITY), MAX_TEXT_COLUMN_CHARS);
        assert_eq!(chars_for(f32::NAN), MAX_TEXT_COLUMN_CHARS);
        assert_eq!(chars_for(f32::MAX), MAX_TEXT_COLUMN_CHARS);
    }

    #[test]
    fn test_fit_wide_column() {
        let cell = fit("id", MAX_TEXT_COLUMN_CHARS);
        assert_eq!(cell.chars().count(), MAX_TEXT_COLUMN_CHARS);
        assert!(cell.starts_with("id "));
    }
}
