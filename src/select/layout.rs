//! Cell geometry of a rendered select widget.
//!
//! The layout is a pure function of the widget's state, so `update` can
//! hit-test a pointer event without a preceding `view` call. Coordinates here
//! are relative to the widget's top-left cell; [`Rect`] adds the origin.
//!
//! ```text
//!  row 0   Data curation ×  Formal analysis ×   × ▴
//!  row 1   [x] Data curation
//!  row 2       Managing and organizing data.
//!  ...
//! ```
//!
//! The trigger occupies the first rows: chips (or the placeholder / single
//! label) on the left, followed by a four-cell gutter holding the clear-all
//! button and the open indicator. Option rows follow directly beneath.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cells reserved at the right of the first trigger row.
pub const GUTTER: usize = 4;

/// Glyph appended to a truncated label.
pub const ELLIPSIS: &str = "…";

/// An absolute rectangle of terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Left column.
    pub x: u16,
    /// Top row.
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Whether `(column, row)` lies inside the rectangle.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let (col, row) = (u32::from(column), u32::from(row));
        let (x, y) = (u32::from(self.x), u32::from(self.y));
        col >= x
            && row >= y
            && col < x + u32::from(self.width)
            && row < y + u32::from(self.height)
    }
}

/// What a cell of the widget does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Anywhere on the trigger that is not a button.
    Trigger,
    /// The `×` of the chip at this position in the selection.
    RemoveChip(usize),
    /// The clear-all `×`.
    ClearAll,
    /// Any row belonging to the option at this index.
    Option(usize),
}

/// Position of one chip on the trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    /// Trigger row.
    pub row: usize,
    /// First column.
    pub col: usize,
    /// Label as it fits on the trigger.
    pub label: String,
}

impl Chip {
    /// Column of the remove button.
    pub fn remove_col(&self) -> usize {
        self.col + self.label.width() + 1
    }

    /// Width including the remove button.
    pub fn width(&self) -> usize {
        self.label.width() + 2
    }
}

/// Rows occupied by one option in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRows {
    /// First row, relative to the widget.
    pub top: usize,
    /// Number of rows: one, or two with a description.
    pub height: usize,
}

/// Geometry of a widget in one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    trigger_rows: usize,
    chips: Vec<Chip>,
    clear_col: Option<usize>,
    options: Vec<OptionRows>,
}

impl Layout {
    /// Lays out a widget.
    ///
    /// * `width` - total width in cells
    /// * `chip_labels` - labels of the chips, empty outside multi-select mode
    /// * `show_clear` - whether the clear-all button is rendered
    /// * `option_heights` - row count per option, empty while the panel is hidden
    pub fn new(width: usize, chip_labels: &[&str], show_clear: bool, option_heights: &[usize]) -> Self {
        let width = width.max(GUTTER + 1);
        let content = width - GUTTER;

        let mut chips = Vec::with_capacity(chip_labels.len());
        let (mut row, mut col) = (0, 0);
        for label in chip_labels {
            let label = truncate(label, content.saturating_sub(2).max(1));
            let chip_width = label.width() + 2;
            if col > 0 && col + chip_width > content {
                row += 1;
                col = 0;
            }
            chips.push(Chip { row, col, label });
            col += chip_width + 1;
        }
        let trigger_rows = row + 1;

        let mut options = Vec::with_capacity(option_heights.len());
        let mut top = trigger_rows;
        for &height in option_heights {
            options.push(OptionRows { top, height });
            top += height;
        }

        Self {
            width,
            trigger_rows,
            chips,
            clear_col: show_clear.then_some(width - 3),
            options,
        }
    }

    /// Total width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Width left of the gutter.
    pub fn content_width(&self) -> usize {
        self.width - GUTTER
    }

    /// Total height in cells.
    pub fn height(&self) -> usize {
        self.trigger_rows + self.options.iter().map(|o| o.height).sum::<usize>()
    }

    /// Rows used by the trigger.
    pub fn trigger_rows(&self) -> usize {
        self.trigger_rows
    }

    /// Chip positions in selection order.
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// Column of the clear-all button on the first row.
    pub fn clear_col(&self) -> Option<usize> {
        self.clear_col
    }

    /// Column of the open indicator on the first row.
    pub fn indicator_col(&self) -> usize {
        self.width - 1
    }

    /// Option row spans in option order.
    pub fn options(&self) -> &[OptionRows] {
        &self.options
    }

    /// The widget's bounds when its top-left cell is at `(x, y)`.
    pub fn bounds(&self, x: u16, y: u16) -> Rect {
        Rect {
            x,
            y,
            width: u16::try_from(self.width).unwrap_or(u16::MAX),
            height: u16::try_from(self.height()).unwrap_or(u16::MAX),
        }
    }

    /// What a click at the relative cell `(col, row)` hits, if anything.
    pub fn hit(&self, col: usize, row: usize) -> Option<Target> {
        if col >= self.width {
            return None;
        }
        if row < self.trigger_rows {
            if let Some(i) = self
                .chips
                .iter()
                .position(|c| c.row == row && c.remove_col() == col)
            {
                return Some(Target::RemoveChip(i));
            }
            if row == 0 && self.clear_col == Some(col) {
                return Some(Target::ClearAll);
            }
            return Some(Target::Trigger);
        }
        self.options
            .iter()
            .position(|o| row >= o.top && row < o.top + o.height)
            .map(Target::Option)
    }
}

/// Shortens `s` to at most `max` cells, marking the cut with [`ELLIPSIS`].
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let r = Rect { x: 2, y: 3, width: 4, height: 2 };
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(2, 5));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn test_rect_near_edge_does_not_overflow() {
        let r = Rect { x: u16::MAX - 1, y: u16::MAX - 1, width: 10, height: 10 };
        assert!(r.contains(u16::MAX, u16::MAX));
    }

    #[test]
    fn test_single_row_trigger() {
        let layout = Layout::new(20, &[], true, &[]);
        assert_eq!(layout.height(), 1);
        assert_eq!(layout.clear_col(), Some(17));
        assert_eq!(layout.indicator_col(), 19);
        assert_eq!(layout.hit(0, 0), Some(Target::Trigger));
        assert_eq!(layout.hit(17, 0), Some(Target::ClearAll));
        assert_eq!(layout.hit(19, 0), Some(Target::Trigger));
        assert_eq!(layout.hit(20, 0), None);
        assert_eq!(layout.hit(0, 1), None);
    }

    #[test]
    fn test_chips_and_remove_buttons() {
        // "A ×" at 0..3, "Bb ×" at 4..8
        let layout = Layout::new(20, &["A", "Bb"], false, &[]);
        assert_eq!(layout.chips()[0].col, 0);
        assert_eq!(layout.chips()[0].remove_col(), 2);
        assert_eq!(layout.chips()[1].col, 4);
        assert_eq!(layout.chips()[1].remove_col(), 7);
        assert_eq!(layout.hit(2, 0), Some(Target::RemoveChip(0)));
        assert_eq!(layout.hit(7, 0), Some(Target::RemoveChip(1)));
        assert_eq!(layout.hit(0, 0), Some(Target::Trigger));
        assert_eq!(layout.clear_col(), None);
    }

    #[test]
    fn test_chips_wrap() {
        // content width 10: "Alpha ×" (7) fits, "Beta ×" (6) wraps
        let layout = Layout::new(14, &["Alpha", "Beta"], false, &[]);
        assert_eq!(layout.trigger_rows(), 2);
        assert_eq!(layout.chips()[1].row, 1);
        assert_eq!(layout.chips()[1].col, 0);
        assert_eq!(layout.hit(5, 1), Some(Target::RemoveChip(1)));
    }

    #[test]
    fn test_long_chip_is_truncated() {
        let layout = Layout::new(12, &["Formal analysis"], false, &[]);
        let chip = &layout.chips()[0];
        assert_eq!(chip.width(), 8);
        assert!(chip.label.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_option_rows() {
        let layout = Layout::new(20, &[], false, &[2, 1, 2]);
        assert_eq!(layout.height(), 6);
        assert_eq!(layout.hit(3, 1), Some(Target::Option(0)));
        assert_eq!(layout.hit(3, 2), Some(Target::Option(0)));
        assert_eq!(layout.hit(3, 3), Some(Target::Option(1)));
        assert_eq!(layout.hit(3, 5), Some(Target::Option(2)));
        assert_eq!(layout.hit(3, 6), None);
    }

    #[test]
    fn test_bounds() {
        let layout = Layout::new(20, &[], false, &[1, 1]);
        let rect = layout.bounds(5, 10);
        assert_eq!(rect, Rect { x: 5, y: 10, width: 20, height: 3 });
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello", 4), "hel…");
        assert_eq!(truncate("hello", 1), "…");
        assert_eq!(truncate("hello", 0), "");
    }
}
