//! Content stream rendering for laid out pages.

use crate::font::FontBook;
use crate::page::{Page, PageContents, PlacedLine, PlacedRule};
use crate::units::Pt;
use pdf_writer::{Content, Name, Str};

/// Render everything on a page to an (uncompressed) PDF content stream.
///
/// The header band is painted first so its text lands on top of it; the footer comes
/// last. Layout positions are measured from the top of the page and are flipped into
/// PDF's bottom-up space here.
pub(crate) fn render_contents(page: &Page, fonts: &FontBook) -> Vec<u8> {
    let height = page.height();
    let mut content = Content::new();

    if let Some(header) = &page.header {
        let band = header.band.to_pdf(height);
        content.save_state();
        header.fill.apply_fill(&mut content);
        content.rect(band.x1, band.y1, band.x2 - band.x1, band.y2 - band.y1);
        content.fill_nonzero();
        content.restore_state();

        for line in header.lines.iter() {
            show_line(&mut content, line, fonts, height);
        }
    }

    for item in page.contents.iter() {
        match item {
            PageContents::Text(line) | PageContents::Marker(line) => {
                show_line(&mut content, line, fonts, height)
            }
            PageContents::Rule(rule) => stroke_rule(&mut content, rule, height),
        }
    }

    if let Some(footer) = &page.footer {
        show_line(&mut content, footer, fonts, height);
    }

    content.finish()
}

fn show_line(content: &mut Content, line: &PlacedLine, fonts: &FontBook, page_height: Pt) {
    if line.text.is_empty() {
        return;
    }

    let id = fonts.id(line.style.weight);
    let encoded = fonts.faces[id].encode(&line.text);
    let font_name = format!("F{}", id.index());

    content.save_state();
    line.style.colour.apply_fill(content);
    content
        .begin_text()
        .set_font(Name(font_name.as_bytes()), *line.style.size)
        .next_line(*line.x, *(page_height - line.baseline))
        .show(Str(&encoded))
        .end_text();
    content.restore_state();
}

fn stroke_rule(content: &mut Content, rule: &PlacedRule, page_height: Pt) {
    let y = *(page_height - rule.y);
    content.save_state();
    rule.style.colour.apply_stroke(content);
    content
        .set_line_width(*rule.style.stroke_width)
        .move_to(*rule.x1, y)
        .line_to(*rule.x2, y)
        .stroke();
    content.restore_state();
}
