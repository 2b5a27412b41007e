use serde::{Deserialize, Serialize};

/// A colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Create a new colour in the Gray space, g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }

    /// Set this colour as the fill colour of a content stream
    pub(crate) fn apply_fill(&self, content: &mut pdf_writer::Content) {
        match *self {
            Colour::RGB { r, g, b } => {
                content.set_fill_rgb(r, g, b);
            }
            Colour::Grey { g } => {
                content.set_fill_gray(g);
            }
        }
    }

    /// Set this colour as the stroke colour of a content stream
    pub(crate) fn apply_stroke(&self, content: &mut pdf_writer::Content) {
        match *self {
            Colour::RGB { r, g, b } => {
                content.set_stroke_rgb(r, g, b);
            }
            Colour::Grey { g } => {
                content.set_stroke_gray(g);
            }
        }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

/// The palette used by the default document styles
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };

    /// Header band fill and top-level headings
    pub const BRAND_BLUE: Colour = Colour::RGB {
        r: 37.0 / 255.0,
        g: 99.0 / 255.0,
        b: 235.0 / 255.0,
    };
    pub const SLATE_700: Colour = Colour::RGB {
        r: 55.0 / 255.0,
        g: 65.0 / 255.0,
        b: 81.0 / 255.0,
    };
    pub const SLATE_600: Colour = Colour::RGB {
        r: 75.0 / 255.0,
        g: 85.0 / 255.0,
        b: 99.0 / 255.0,
    };
    pub const SLATE_500: Colour = Colour::RGB {
        r: 107.0 / 255.0,
        g: 114.0 / 255.0,
        b: 128.0 / 255.0,
    };
    /// Body text
    pub const INK: Colour = Colour::RGB {
        r: 50.0 / 255.0,
        g: 50.0 / 255.0,
        b: 50.0 / 255.0,
    };
    /// Horizontal rules
    pub const RULE_GREY: Colour = Colour::Grey { g: 200.0 / 255.0 };
    /// Page footers
    pub const FOOTER_GREY: Colour = Colour::Grey { g: 150.0 / 255.0 };
}
