use crate::config::LayoutConfig;
use crate::layout::{Margins, RuleStyle, StyleSpec, WrappedLine};
use crate::page::{Page, PlacedLine, PlacedRule};
use crate::pagesize::PageSize;
use crate::units::Pt;

/// Where the next block goes: a page, and a distance from that page's top edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub page_index: usize,
    pub y: Pt,
}

/// Where a block ended up after placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub page_index: usize,
    /// Baseline of the block's first line, from the top of the page
    pub first_baseline: Pt,
}

/// Places blocks top to bottom onto fixed-size pages, starting a new page whenever the
/// next block doesn't fit above the bottom margin.
///
/// The flow owns no state of its own; the cursor and the pages are threaded through every
/// call so a single document's layout is an explicit accumulation.
#[derive(Debug, Clone)]
pub struct PageFlow {
    page_size: PageSize,
    margins: Margins,
    first_page_top: Pt,
}

impl PageFlow {
    pub fn new(config: &LayoutConfig) -> PageFlow {
        PageFlow {
            page_size: config.page_size,
            margins: config.margins,
            first_page_top: config.first_page_top,
        }
    }

    /// A cursor at the top of the body of the first page, and that (empty) first page
    pub fn start(&self) -> (LayoutCursor, Vec<Page>) {
        let cursor = LayoutCursor {
            page_index: 0,
            y: self.first_page_top,
        };
        (cursor, vec![Page::new(0, self.page_size)])
    }

    /// Where the body starts on the page with the given index
    pub fn top(&self, page_index: usize) -> Pt {
        if page_index == 0 {
            self.first_page_top
        } else {
            self.margins.top
        }
    }

    /// Lowest point content may reach
    pub fn bottom(&self) -> Pt {
        self.page_size.1 - self.margins.bottom
    }

    pub fn left(&self) -> Pt {
        self.margins.left
    }

    pub fn content_width(&self) -> Pt {
        self.margins.content_width(self.page_size.0)
    }

    /// Start a new page if `needed` doesn't fit below the cursor.
    ///
    /// A page whose body hasn't been started yet is never abandoned: a block taller than
    /// a whole page is placed anyway and overflows the bottom margin.
    fn make_room(&self, needed: Pt, cursor: &mut LayoutCursor, pages: &mut Vec<Page>) {
        debug_assert_eq!(cursor.page_index + 1, pages.len(), "cursor is not on the last page");
        if cursor.y + needed <= self.bottom() {
            return;
        }
        if cursor.y <= self.top(cursor.page_index) {
            log::warn!(
                "block of height {needed} doesn't fit on an empty page, overflowing page {}",
                cursor.page_index + 1
            );
            return;
        }

        cursor.page_index += 1;
        cursor.y = self.top(cursor.page_index);
        pages.push(Page::new(cursor.page_index, self.page_size));
        log::debug!("started page {}", cursor.page_index + 1);
    }

    fn current<'p>(&self, cursor: &LayoutCursor, pages: &'p mut [Page]) -> &'p mut Page {
        debug_assert_eq!(cursor.page_index + 1, pages.len(), "cursor is not on the last page");
        &mut pages[cursor.page_index]
    }

    /// Place a block's lines as one unit, breaking to a new page first if it doesn't fit.
    ///
    /// Lines are set at the left margin plus the style's indent, one `line_height` apart,
    /// the first baseline `space_before` below the cursor. The cursor ends up below the
    /// last line plus `space_after`.
    ///
    /// The one case where the cursor passes the bottom margin without a page break is a
    /// block taller than a whole page placed on a page with nothing on it yet. It is set
    /// there in one piece and overflows rather than leaving the page blank.
    ///
    /// `cursor` must be on the last of `pages`, as returned by [`PageFlow::start`].
    pub fn place(
        &self,
        lines: &WrappedLine,
        style: &StyleSpec,
        cursor: &mut LayoutCursor,
        pages: &mut Vec<Page>,
    ) -> Placement {
        self.make_room(style.block_height(lines.len()), cursor, pages);

        let first_baseline = cursor.y + style.space_before;
        let x = self.left() + style.indent;
        let page = self.current(cursor, pages);
        for (i, text) in lines.iter().enumerate() {
            page.add_line(PlacedLine {
                text: text.clone(),
                style: *style,
                x,
                baseline: first_baseline + style.line_height * i as f32,
            });
        }

        cursor.y += style.block_height(lines.len());
        Placement {
            page_index: cursor.page_index,
            first_baseline,
        }
    }

    /// Place a horizontal rule across the content width, breaking first if it doesn't fit
    pub fn place_rule(
        &self,
        rule: &RuleStyle,
        cursor: &mut LayoutCursor,
        pages: &mut Vec<Page>,
    ) -> Placement {
        self.make_room(rule.height, cursor, pages);

        let y = cursor.y;
        let x1 = self.left();
        let x2 = x1 + self.content_width();
        self.current(cursor, pages).add_rule(PlacedRule {
            x1,
            x2,
            y,
            style: *rule,
        });

        cursor.y += rule.height;
        Placement {
            page_index: cursor.page_index,
            first_baseline: y,
        }
    }

    /// Advance the cursor without placing anything. Never starts a new page; the next
    /// block to be placed does that if it has to.
    pub fn skip(&self, amount: Pt, cursor: &mut LayoutCursor) {
        cursor.y += amount;
    }
}
