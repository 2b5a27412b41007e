use crate::config::LayoutConfig;
use crate::font::FontBook;
use crate::layout::{FontWeight, StyleSpec};
use crate::page::{HeaderBand, Page, PlacedLine};
use crate::rect::Rect;
use crate::units::Pt;

/// Today's date as shown in the header band, e.g. `19.10.2026`
pub fn today() -> String {
    chrono::Local::now().format("%d.%m.%Y").to_string()
}

/// Stamps the title band onto the first page and a "page N of M" footer onto every page.
///
/// Decoration runs once, after pagination, because the footer needs the final page count.
pub struct Decorator<'a> {
    config: &'a LayoutConfig,
    fonts: &'a FontBook,
    note: Option<String>,
}

impl<'a> Decorator<'a> {
    /// `fonts` are used to measure the footer so it can be centred
    pub fn new(config: &'a LayoutConfig, fonts: &'a FontBook) -> Decorator<'a> {
        Decorator {
            config,
            fonts,
            note: None,
        }
    }

    /// Add a short note, such as a session id, at the right of the header band
    pub fn with_note<S: ToString>(mut self, note: S) -> Decorator<'a> {
        self.note = Some(note.to_string());
        self
    }

    /// Decorate `pages` in place. Does nothing to an empty slice.
    pub fn finalize(&self, pages: &mut [Page], title: &str, created_date: &str) {
        let total = pages.len();
        if let Some(first) = pages.first_mut() {
            first.header = Some(self.header_band(first, title, created_date));
        }
        for (i, page) in pages.iter_mut().enumerate() {
            page.footer = Some(self.footer(page, i, total));
        }
    }

    /// The footer text for the page at `index` in a document of `total` pages
    pub fn footer_text(&self, index: usize, total: usize) -> String {
        format!(
            "{} | page {} of {}",
            self.config.footer.label,
            index + 1,
            total
        )
    }

    fn header_band(&self, page: &Page, title: &str, created_date: &str) -> HeaderBand {
        let header = &self.config.header;
        let left = self.config.margins.left;
        let title_style = StyleSpec::new(FontWeight::Bold, header.title_size, header.text_colour);
        let caption_style =
            StyleSpec::new(FontWeight::Normal, header.caption_size, header.text_colour);

        let mut lines = vec![
            PlacedLine {
                text: title.to_string(),
                style: title_style,
                x: left,
                baseline: header.title_baseline,
            },
            PlacedLine {
                text: format!("{}: {}", header.created_label, created_date),
                style: caption_style,
                x: left,
                baseline: header.caption_baseline,
            },
        ];
        if let Some(note) = &self.note {
            lines.push(PlacedLine {
                text: note.clone(),
                style: caption_style,
                x: page.width() - self.config.margins.right - header.note_offset,
                baseline: header.caption_baseline,
            });
        }

        HeaderBand {
            band: Rect::new(Pt(0.0), Pt(0.0), page.width(), header.height),
            fill: header.fill,
            lines,
        }
    }

    fn footer(&self, page: &Page, index: usize, total: usize) -> PlacedLine {
        let footer = &self.config.footer;
        let style = StyleSpec::new(FontWeight::Normal, footer.size, footer.colour);
        let text = self.footer_text(index, total);
        let width = self.fonts.width_of(&text, style.weight, style.size);

        PlacedLine {
            x: (page.width() - width) / 2.0,
            baseline: page.height() - footer.baseline_from_bottom,
            text,
            style,
        }
    }
}
