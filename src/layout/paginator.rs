use crate::config::LayoutConfig;
use crate::font::FontBook;
use crate::layout::{
    classify_lines, wrap, Block, BlockKind, Decorator, FontWeight, LayoutCursor, PageFlow,
    StyleSpec, WrappedLine,
};
use crate::page::{Page, PlacedLine};
use crate::units::Pt;

/// A bookmark pointing at the page a heading landed on
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub title: String,
    pub page_index: usize,
    /// 1 for top-level headings, 2 for sub-headings
    pub level: u8,
    /// Baseline of the heading's first line, from the top of the page
    pub baseline: Pt,
    /// Font size the heading is set in
    pub size: Pt,
}

/// The laid out pages of one document, along with its title and bookmarks
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDocument {
    pub title: String,
    pub pages: Vec<Page>,
    pub outline: Vec<Bookmark>,
}

impl PaginatedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The text of every body line, in reading order across all pages
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.lines())
            .map(|line| line.text.as_str())
    }
}

/// Turns a title and a markdown body into fixed-layout pages.
///
/// Each line of the body is classified on its own, styled by its kind, wrapped to the
/// content width and placed below the previous block, moving to a new page whenever a
/// block doesn't fit.
///
/// ```
/// use md_paginator::{FontBook, LayoutConfig};
/// use md_paginator::layout::Paginator;
///
/// let config = LayoutConfig::default();
/// let fonts = FontBook::default();
/// let doc = Paginator::new(&config, &fonts).paginate("Plan", "# Goals\n- Ship it");
/// assert_eq!(doc.page_count(), 1);
/// assert_eq!(doc.body_lines().collect::<Vec<_>>(), vec!["Goals", "Ship it"]);
/// ```
pub struct Paginator<'a> {
    config: &'a LayoutConfig,
    fonts: &'a FontBook,
    flow: PageFlow,
}

impl<'a> Paginator<'a> {
    pub fn new(config: &'a LayoutConfig, fonts: &'a FontBook) -> Paginator<'a> {
        Paginator {
            config,
            fonts,
            flow: PageFlow::new(config),
        }
    }

    /// Lay out `body` onto pages. The title is carried along for the header band and
    /// the document info, it isn't placed in the body.
    ///
    /// An empty body still yields a single, empty page.
    pub fn paginate(&self, title: &str, body: &str) -> PaginatedDocument {
        let (mut cursor, mut pages) = self.flow.start();
        let mut outline = Vec::new();

        let blocks = classify_lines(body);
        for block in blocks.iter() {
            self.place_block(block, &mut cursor, &mut pages, &mut outline);
        }

        log::debug!(
            "laid out {} blocks from {:?} onto {} page(s)",
            blocks.len(),
            title,
            pages.len()
        );

        PaginatedDocument {
            title: title.to_string(),
            pages,
            outline,
        }
    }

    /// Lay out `body` and stamp the header band and footers onto the result
    pub fn render(&self, title: &str, body: &str, created_date: &str) -> PaginatedDocument {
        let mut document = self.paginate(title, body);
        self.decorator()
            .finalize(&mut document.pages, title, created_date);
        document
    }

    /// A decorator sharing this paginator's configuration and faces
    pub fn decorator(&self) -> Decorator<'a> {
        Decorator::new(self.config, self.fonts)
    }

    /// The style a block is set in: its kind's style, in bold if the block asks for it
    fn style_for(&self, block: &Block) -> Option<StyleSpec> {
        let style = *self.config.styles.get(block.kind)?;
        Some(if block.bold {
            style.with_weight(FontWeight::Bold)
        } else {
            style
        })
    }

    fn place_block(
        &self,
        block: &Block,
        cursor: &mut LayoutCursor,
        pages: &mut Vec<Page>,
        outline: &mut Vec<Bookmark>,
    ) {
        match block.kind {
            BlockKind::Blank => self.flow.skip(self.config.blank_line_spacing, cursor),
            BlockKind::Rule => {
                self.flow.place_rule(&self.config.rule, cursor, pages);
            }
            _ => {
                let Some(style) = self.style_for(block) else {
                    return;
                };
                let width = self.flow.content_width() - style.indent;
                let mut lines: WrappedLine = wrap(&block.text, width, &style, self.fonts);
                // a block with nothing left to draw, like `- **`, still takes up a line
                if lines.is_empty() {
                    lines.push(String::new());
                }
                let placement = self.flow.place(&lines, &style, cursor, pages);

                if let Some(marker) = &block.marker {
                    // markers are always set in the regular weight
                    pages[placement.page_index].add_marker(PlacedLine {
                        text: marker.clone(),
                        style: style.with_weight(FontWeight::Normal),
                        x: self.flow.left() + self.config.marker_offset,
                        baseline: placement.first_baseline,
                    });
                }

                let level = match block.kind {
                    BlockKind::Heading1 => Some(1),
                    BlockKind::Heading2 => Some(2),
                    _ => None,
                };
                if let Some(level) = level {
                    outline.push(Bookmark {
                        title: block.text.clone(),
                        page_index: placement.page_index,
                        level,
                        baseline: placement.first_baseline,
                        size: style.size,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Mm;

    fn paginate(body: &str) -> PaginatedDocument {
        let config = LayoutConfig::default();
        let fonts = FontBook::default();
        Paginator::new(&config, &fonts).paginate("Title", body)
    }

    #[test]
    fn heading_and_bullet_on_one_page() {
        let doc = paginate("# Goals\n- Ship it");
        assert_eq!(doc.page_count(), 1);

        let lines: Vec<&PlacedLine> = doc.pages[0].lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].style.size, Pt(16.0));
        assert_eq!(lines[0].style.weight, FontWeight::Bold);
        assert_eq!(lines[1].text, "Ship it");
        assert_eq!(lines[1].x, lines[0].x + Mm(8.0).into());

        let marker = doc.pages[0]
            .contents
            .iter()
            .find_map(|c| match c {
                crate::page::PageContents::Marker(m) => Some(m),
                _ => None,
            })
            .expect("bullet marker");
        assert_eq!(marker.text, "•");
        assert_eq!(marker.baseline, lines[1].baseline);
    }

    #[test]
    fn empty_body_is_one_empty_page() {
        let doc = paginate("");
        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages[0].is_empty());
        assert!(doc.outline.is_empty());
    }

    #[test]
    fn blank_lines_only_move_the_cursor() {
        let with_gap = paginate("one\n\n\ntwo");
        let without = paginate("one\ntwo");
        let gap = |doc: &PaginatedDocument| {
            let lines: Vec<&PlacedLine> = doc.pages[0].lines().collect();
            lines[1].baseline - lines[0].baseline
        };
        let spacing: Pt = Mm(8.0).into();
        assert!((gap(&with_gap) - gap(&without) - spacing).abs() < 1e-3);
    }

    #[test]
    fn emphasised_list_items_are_bold_but_markers_are_not() {
        let doc = paginate("1. **Decide** quickly");
        let line = doc.pages[0].lines().next().unwrap();
        assert_eq!(line.text, "Decide quickly");
        assert_eq!(line.style.weight, FontWeight::Bold);
        let marker = doc.pages[0].text_items().find(|l| l.text == "1.").unwrap();
        assert_eq!(marker.style.weight, FontWeight::Normal);
    }

    #[test]
    fn empty_items_still_take_a_line() {
        let doc = paginate("- **\nnext line");
        let page = &doc.pages[0];
        let marker = page
            .contents
            .iter()
            .find_map(|c| match c {
                crate::page::PageContents::Marker(m) => Some(m),
                _ => None,
            })
            .expect("bullet marker");
        let next = page.lines().find(|l| l.text == "next line").unwrap();
        assert!(next.baseline - marker.baseline >= marker.style.line_height);
    }

    #[test]
    fn empty_headings_and_bold_paragraphs_take_a_line() {
        let config = LayoutConfig::default();
        for body in ["####\nafter", "** **\nafter"] {
            let doc = paginate(body);
            let after = doc.pages[0].lines().last().unwrap();
            assert_eq!(after.text, "after");
            let advanced = after.baseline - config.first_page_top;
            assert!(advanced > config.styles.paragraph.line_height * 0.9, "{body:?}");
        }
    }

    #[test]
    fn headings_become_bookmarks() {
        let doc = paginate("# One\n## Two\n### Three\ntext");
        let titles: Vec<(&str, u8)> = doc
            .outline
            .iter()
            .map(|b| (b.title.as_str(), b.level))
            .collect();
        assert_eq!(titles, vec![("One", 1), ("Two", 2)]);
    }

    #[test]
    fn long_bodies_flow_onto_more_pages() {
        let body = (0..200)
            .map(|i| format!("Paragraph number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let doc = paginate(&body);
        assert!(doc.page_count() > 1);
        assert_eq!(doc.body_lines().count(), 200);
        for (i, page) in doc.pages.iter().enumerate() {
            assert_eq!(page.index, i);
        }
    }

    #[test]
    fn rendering_decorates_the_pages() {
        let config = LayoutConfig::default();
        let fonts = FontBook::default();
        let doc = Paginator::new(&config, &fonts).render("Plan", "text", "19.10.2026");
        assert!(doc.pages[0].header.is_some());
        assert!(doc.pages[0].footer.is_some());
    }
}
