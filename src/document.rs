use crate::{
    error::Result,
    font::FontBook,
    info::Info,
    layout::PaginatedDocument,
    outline::Outline,
    refs::{ObjectReferences, RefType},
};
use pdf_writer::{Finish, Pdf, Ref};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Serializes a paginated document to PDF with a call to [PdfDocument::write]
pub struct PdfDocument<'a> {
    document: &'a PaginatedDocument,
    fonts: &'a FontBook,
    info: Option<Info>,
}

impl<'a> PdfDocument<'a> {
    /// `fonts` must be the faces the document was laid out with, or the text will not
    /// fit the space it was measured for
    pub fn new(document: &'a PaginatedDocument, fonts: &'a FontBook) -> PdfDocument<'a> {
        PdfDocument {
            document,
            fonts,
            info: None,
        }
    }

    /// Sets information about the document. If not provided, an information block holding
    /// only the title, creator and creation date is written.
    pub fn with_info(mut self, info: Info) -> PdfDocument<'a> {
        self.info = Some(info);
        self
    }

    /// For every face, the glyphs the document draws with it
    fn used_glyphs(&self) -> Vec<BTreeMap<u16, char>> {
        let mut used = vec![BTreeMap::new(); self.fonts.faces.len()];
        for page in self.document.pages.iter() {
            for line in page.text_items() {
                self.fonts
                    .record_glyphs(&line.text, line.style.weight, &mut used);
            }
        }
        used
    }

    /// Write the entire document to the writer. The document is rendered in memory first,
    /// then written out in one go.
    pub fn write<W: Write>(&self, mut w: W) -> Result<()> {
        let PaginatedDocument { title, pages, outline } = self.document;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        let info = self.info.clone().unwrap_or_else(|| {
            let mut info = Info::new();
            info.title(title);
            info
        });
        info.write(&mut refs, &mut writer);

        let page_refs: Vec<Ref> = pages
            .iter()
            .map(|page| refs.gen(RefType::Page(page.index)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        let used = self.used_glyphs();
        for (id, face) in self.fonts.faces.iter() {
            let glyphs = used.get(id.index()).cloned().unwrap_or_default();
            face.write(&mut refs, id.index(), &glyphs, &mut writer);
        }

        for page in pages.iter() {
            page.write(&mut refs, self.fonts, &mut writer)?;
        }

        let outline = Outline::new(outline);
        let outline_id = if outline.is_empty() {
            None
        } else {
            Some(outline.write(&mut refs, pages, &mut writer)?)
        };

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outline_id) = outline_id {
            catalog.outlines(outline_id);
        }
        catalog.finish();

        log::debug!("writing {} page(s) of {:?}", pages.len(), title);
        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    /// Render the document to PDF bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }

    /// Render the document to a PDF file, replacing it if it exists
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write(std::io::BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::Paginator;

    fn render(body: &str) -> Vec<u8> {
        let config = LayoutConfig::default();
        let fonts = FontBook::default();
        let doc = Paginator::new(&config, &fonts).render("Plan", body, "01.01.2026");
        PdfDocument::new(&doc, &fonts).to_bytes().unwrap()
    }

    fn count(haystack: &[u8], needle: &str) -> usize {
        String::from_utf8_lossy(haystack).matches(needle).count()
    }

    #[test]
    fn writes_a_pdf() {
        let bytes = render("# Hello\nworld");
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, "/Type /Page\n"), 1);
        assert_eq!(count(&bytes, "/BaseFont /Helvetica-Bold"), 1);
        assert_eq!(count(&bytes, "/Encoding /WinAnsiEncoding"), 2);
    }

    #[test]
    fn outlines_only_when_there_are_headings() {
        assert!(count(&render("# Hello"), "/Outlines") >= 1);
        assert_eq!(count(&render("just text"), "/Outlines"), 0);
    }

    #[test]
    fn one_page_object_per_page() {
        let body = (0..300)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let config = LayoutConfig::default();
        let fonts = FontBook::default();
        let doc = Paginator::new(&config, &fonts).render("Long", &body, "today");
        let bytes = PdfDocument::new(&doc, &fonts).to_bytes().unwrap();
        assert!(doc.page_count() > 1);
        assert_eq!(count(&bytes, "/Type /Page\n"), doc.page_count());
    }
}
