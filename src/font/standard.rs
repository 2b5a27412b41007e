//! The standard 14 PDF fonts that the default styles rely on.
//!
//! These faces are built into every PDF reader and are never embedded, so their metrics
//! have to be known up front. Widths are the Adobe AFM advance widths (in 1/1000 em) for
//! the WinAnsi code points 0x20..=0xFF. Text drawn with a standard font is encoded as
//! WinAnsi; characters outside that encoding are drawn (and measured) as `?`.

use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Name, Pdf};

/// WinAnsi code used in place of characters the encoding can't represent
const UNMAPPED: u8 = b'?';

/// A standard PDF font face that needs no embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// The PostScript name of the face, as written into the font dictionary
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    fn widths(&self) -> &'static [u16; 224] {
        match self {
            StandardFont::Helvetica => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Advance width of a single WinAnsi code, in 1/1000 em
    fn code_width(&self, code: u8) -> u16 {
        if code < 0x20 {
            return 0;
        }
        self.widths()[(code - 0x20) as usize]
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| self.code_width(encode_char(ch).unwrap_or(UNMAPPED)) as u32)
            .sum();
        size * (units as f32 / 1000.0)
    }

    /// Encode text as WinAnsi bytes for a content stream
    pub fn encode(&self, text: &str) -> Vec<u8> {
        encode(text)
    }

    /// Write a simple font dictionary; the face itself comes with the reader
    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(font_index));
        writer
            .type1_font(id)
            .base_font(Name(self.pdf_name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Encode text into WinAnsi, substituting `?` for anything unrepresentable
pub fn encode(text: &str) -> Vec<u8> {
    let mut unmapped = 0usize;
    let bytes: Vec<u8> = text
        .chars()
        .map(|ch| {
            encode_char(ch).unwrap_or_else(|| {
                unmapped += 1;
                UNMAPPED
            })
        })
        .collect();
    if unmapped > 0 {
        log::warn!(
            "{unmapped} character(s) in {text:?} can't be drawn with a standard font, substituting '?'"
        );
    }
    bytes
}

/// Map a character to its WinAnsi code, if it has one
pub fn encode_char(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_ascii_with_afm_widths() {
        // "Hi" = 722 + 222 in Helvetica
        let width = StandardFont::Helvetica.width_of("Hi", Pt(10.0));
        assert!((width.0 - 9.44).abs() < 1e-4);
        // bold "Hi" = 722 + 278
        assert_eq!(StandardFont::HelveticaBold.width_of("Hi", Pt(10.0)), Pt(10.0));
    }

    #[test]
    fn encodes_latin1_and_bullets() {
        assert_eq!(encode("Grüße •"), vec![b'G', b'r', 0xFC, 0xDF, b'e', b' ', 0x95]);
        assert_eq!(encode_char('€'), Some(0x80));
        assert_eq!(encode_char('→'), None);
    }

    #[test]
    fn unmapped_characters_measure_as_question_marks() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.width_of("→", Pt(12.0)), font.width_of("?", Pt(12.0)));
        assert_eq!(font.encode("a→b"), b"a?b".to_vec());
    }

    #[test]
    fn tables_cover_every_printable_code() {
        for code in (0x20u8..=0x7E).chain(0xA0..=0xFF) {
            assert!(StandardFont::Helvetica.code_width(code) > 0, "code {code:#x}");
            assert!(StandardFont::HelveticaBold.code_width(code) > 0, "code {code:#x}");
        }
    }
}
