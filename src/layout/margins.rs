use crate::units::{Mm, Pt};
use serde::{Deserialize, Serialize};

/// Margins are used when flowing blocks onto a page. Nothing prevents an oversized
/// block from overflowing the bottom margin; the margins are the guidelines the
/// [`PageFlow`](crate::layout::PageFlow) uses to decide where lines start and when a
/// page is full.
///
/// The top margin applies to continuation pages only: the first page reserves room
/// for the header band via [`LayoutConfig::first_page_top`](crate::LayoutConfig::first_page_top).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Default for Margins {
    fn default() -> Self {
        Margins::all(Mm(20.0))
    }
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric<D: Into<Pt>>(vertical: D, horizontal: D) -> Margins {
        let vertical: Pt = vertical.into();
        let horizontal: Pt = horizontal.into();
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// The width left for content on a page of the given width
    pub fn content_width(&self, page_width: Pt) -> Pt {
        page_width - self.left - self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_twenty_millimetres() {
        let m = Margins::default();
        let expected: Pt = Mm(20.0).into();
        assert_eq!(m.top, expected);
        assert_eq!(m.left, m.right);
    }

    #[test]
    fn content_width_subtracts_sides() {
        let m = Margins::symmetric(Pt(10.0), Pt(30.0));
        assert_eq!(m.content_width(Pt(200.0)), Pt(140.0));
        assert_eq!(m.top, Pt(10.0));
    }
}
