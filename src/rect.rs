use crate::units::*;
use serde::{Deserialize, Serialize};

/// A rectangle in layout space, specified by its top-left corner and its size.
///
/// Layout space measures `y` downwards from the top edge of the page, the same way
/// the [`LayoutCursor`](crate::layout::LayoutCursor) does. Use [`Rect::to_pdf`] to
/// convert into PDF's bottom-up coordinate system.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Distance of the left edge from the left side of the page
    pub x: Pt,
    /// Distance of the top edge from the top of the page
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
}

impl Rect {
    pub fn new(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The distance of the bottom edge from the top of the page
    pub fn bottom(&self) -> Pt {
        self.y + self.height
    }

    /// Convert into a PDF rectangle on a page of the given height
    pub fn to_pdf(&self, page_height: Pt) -> pdf_writer::Rect {
        pdf_writer::Rect {
            x1: self.x.0,
            y1: (page_height - self.bottom()).0,
            x2: (self.x + self.width).0,
            y2: (page_height - self.y).0,
        }
    }
}
