use crate::colour::Colour;
use crate::content::render_contents;
use crate::error::Result;
use crate::font::FontBook;
use crate::layout::{RuleStyle, StyleSpec};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Filter, Finish, Name, Pdf};

/// A single line of text at a fixed position on a page
#[derive(Clone, PartialEq, Debug)]
pub struct PlacedLine {
    pub text: String,
    pub style: StyleSpec,
    /// Distance of the start of the line from the left edge of the page
    pub x: Pt,
    /// Distance of the baseline from the top edge of the page
    pub baseline: Pt,
}

/// A horizontal rule spanning the content width
#[derive(Clone, PartialEq, Debug)]
pub struct PlacedRule {
    pub x1: Pt,
    pub x2: Pt,
    /// Distance of the stroke from the top edge of the page
    pub y: Pt,
    pub style: RuleStyle,
}

/// The filled title band on the first page and the text set on it
#[derive(Clone, PartialEq, Debug)]
pub struct HeaderBand {
    pub band: Rect,
    pub fill: Colour,
    pub lines: Vec<PlacedLine>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    /// A wrapped line of a block's text
    Text(PlacedLine),
    /// A list marker, drawn to the left of the first line of its item
    Marker(PlacedLine),
    Rule(PlacedRule),
}

/// One fixed-size page with everything placed on it
#[derive(Clone, PartialEq, Debug)]
pub struct Page {
    /// 0-based position of the page in its document
    pub index: usize,
    /// Width and height of the page
    pub size: PageSize,
    /// The body content, in placement order
    pub contents: Vec<PageContents>,
    /// Only ever set on the first page, during finalization
    pub header: Option<HeaderBand>,
    /// Set on every page during finalization
    pub footer: Option<PlacedLine>,
}

impl Page {
    pub fn new(index: usize, size: PageSize) -> Page {
        Page {
            index,
            size,
            contents: Vec::default(),
            header: None,
            footer: None,
        }
    }

    pub fn width(&self) -> Pt {
        self.size.0
    }

    pub fn height(&self) -> Pt {
        self.size.1
    }

    /// Whether nothing has been placed in the body of the page yet
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn add_line(&mut self, line: PlacedLine) {
        self.contents.push(PageContents::Text(line));
    }

    pub fn add_marker(&mut self, marker: PlacedLine) {
        self.contents.push(PageContents::Marker(marker));
    }

    pub fn add_rule(&mut self, rule: PlacedRule) {
        self.contents.push(PageContents::Rule(rule));
    }

    /// The wrapped body lines on this page, in order, without markers or decorations
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Text(line) => Some(line),
            _ => None,
        })
    }

    /// Every piece of text on the page: header, body lines, markers and footer
    pub fn text_items(&self) -> impl Iterator<Item = &PlacedLine> {
        let header = self.header.iter().flat_map(|h| h.lines.iter());
        let body = self.contents.iter().filter_map(|c| match c {
            PageContents::Text(line) | PageContents::Marker(line) => Some(line),
            PageContents::Rule(_) => None,
        });
        header.chain(body).chain(self.footer.iter())
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        fonts: &FontBook,
        writer: &mut Pdf,
    ) -> Result<()> {
        let id = refs.require(RefType::Page(self.index))?;
        let page_tree_id = refs.require(RefType::PageTree)?;
        let content_id = refs.gen(RefType::ContentForPage(self.index));

        let mut page = writer.page(id);
        page.media_box(pdf_writer::Rect {
            x1: 0.0,
            y1: 0.0,
            x2: *self.width(),
            y2: *self.height(),
        });
        page.parent(page_tree_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.faces.iter() {
            let font_ref = refs.require(RefType::Font(font_id.index()))?;
            resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(self, fonts);
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            rendered.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::layout::FontWeight;
    use crate::pagesize;

    fn line(text: &str, baseline: f32) -> PlacedLine {
        PlacedLine {
            text: text.to_string(),
            style: StyleSpec::new(FontWeight::Normal, Pt(10.0), colours::BLACK),
            x: Pt(50.0),
            baseline: Pt(baseline),
        }
    }

    #[test]
    fn new_pages_are_empty() {
        let page = Page::new(3, pagesize::A4);
        assert!(page.is_empty());
        assert_eq!(page.index, 3);
        assert_eq!(page.height(), pagesize::A4.1);
    }

    #[test]
    fn lines_skip_markers_and_rules() {
        let mut page = Page::new(0, pagesize::A4);
        page.add_marker(line("•", 100.0));
        page.add_line(line("first", 100.0));
        page.add_rule(PlacedRule {
            x1: Pt(50.0),
            x2: Pt(500.0),
            y: Pt(120.0),
            style: RuleStyle::default(),
        });
        page.add_line(line("second", 140.0));
        page.footer = Some(line("footer", 800.0));

        let texts: Vec<&str> = page.lines().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(page.text_items().count(), 4);
        assert!(!page.is_empty());
    }
}
