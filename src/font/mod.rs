//! Font faces used to measure and draw text.
//!
//! A [`FontBook`] holds one face per [`FontWeight`]. By default these are the standard
//! Helvetica and Helvetica-Bold faces, which need no embedding but can only draw WinAnsi
//! text; documents in other scripts should load TrueType faces with [`Font::load`].

mod embedded;
mod standard;

pub use embedded::*;
pub use standard::StandardFont;

use crate::layout::FontWeight;
use crate::refs::ObjectReferences;
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::Pdf;
use std::collections::BTreeMap;

/// A face that text can be measured and drawn with
#[derive(Debug)]
pub enum Typeface {
    /// One of the standard 14 PDF fonts
    Standard(StandardFont),
    /// A TrueType / OpenType font embedded in the output
    Embedded(Font),
}

impl Typeface {
    /// Calculate the width of a given string of text given the font size
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        match self {
            Typeface::Standard(font) => font.width_of(text, size),
            Typeface::Embedded(font) => font.width_of(text, size),
        }
    }

    /// Encode text into the bytes a content stream shows for this face
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Typeface::Standard(font) => font.encode(text),
            Typeface::Embedded(font) => font.encode(text),
        }
    }

    /// Write the font objects. `used` maps the glyphs drawn with an embedded face to the
    /// characters they were drawn for; standard faces ignore it.
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        used: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) {
        match self {
            Typeface::Standard(font) => font.write(refs, font_index, writer),
            Typeface::Embedded(font) => font.write(refs, font_index, used, writer),
        }
    }
}

/// The faces a document is set in, one per weight
#[derive(Debug)]
pub struct FontBook {
    pub faces: Arena<Typeface>,
    regular: Id<Typeface>,
    bold: Id<Typeface>,
}

impl Default for FontBook {
    fn default() -> Self {
        FontBook::helvetica()
    }
}

impl FontBook {
    /// Helvetica for normal text, Helvetica-Bold for bold text
    pub fn helvetica() -> FontBook {
        FontBook::new(
            Typeface::Standard(StandardFont::Helvetica),
            Typeface::Standard(StandardFont::HelveticaBold),
        )
    }

    /// Embedded TrueType / OpenType faces for normal and bold text
    pub fn embedded(regular: Font, bold: Font) -> FontBook {
        FontBook::new(Typeface::Embedded(regular), Typeface::Embedded(bold))
    }

    pub fn new(regular: Typeface, bold: Typeface) -> FontBook {
        let mut faces = Arena::new();
        let regular = faces.alloc(regular);
        let bold = faces.alloc(bold);
        FontBook {
            faces,
            regular,
            bold,
        }
    }

    /// The id of the face used for the given weight
    pub fn id(&self, weight: FontWeight) -> Id<Typeface> {
        match weight {
            FontWeight::Normal => self.regular,
            FontWeight::Bold => self.bold,
        }
    }

    /// The face used for the given weight
    pub fn face(&self, weight: FontWeight) -> &Typeface {
        &self.faces[self.id(weight)]
    }

    /// Calculate the width of text set in the given weight and size
    pub fn width_of(&self, text: &str, weight: FontWeight, size: Pt) -> Pt {
        self.face(weight).width_of(text, size)
    }

    /// Record the glyphs `text` draws with the face for `weight`, for embedded faces.
    /// `used` is indexed by face.
    pub(crate) fn record_glyphs(
        &self,
        text: &str,
        weight: FontWeight,
        used: &mut [BTreeMap<u16, char>],
    ) {
        let id = self.id(weight);
        if let (Typeface::Embedded(font), Some(glyphs)) = (&self.faces[id], used.get_mut(id.index()))
        {
            for ch in text.chars() {
                glyphs.entry(font.glyph_id(ch)).or_insert(ch);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_faces_by_weight() {
        let fonts = FontBook::default();
        assert!(matches!(
            fonts.face(FontWeight::Bold),
            Typeface::Standard(StandardFont::HelveticaBold)
        ));
        assert_ne!(fonts.id(FontWeight::Normal), fonts.id(FontWeight::Bold));
    }

    #[test]
    fn bold_text_is_wider() {
        let fonts = FontBook::helvetica();
        let normal = fonts.width_of("bold move", FontWeight::Normal, Pt(10.0));
        let bold = fonts.width_of("bold move", FontWeight::Bold, Pt(10.0));
        assert!(bold > normal);
    }
}
