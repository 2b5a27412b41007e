//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are portrait (width, height). Documents default to [`A4`], the format the
//! default [`LayoutConfig`](crate::LayoutConfig) margins and header band were designed for.
//!
//! ```
//! use md_paginator::pagesize;
//!
//! let size = pagesize::by_name("Letter").expect("known size");
//! assert_eq!(size, pagesize::LETTER);
//! ```

use crate::error::{Error, Result};
use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Look up a page size by its (case-insensitive) name
pub fn by_name(name: &str) -> Result<PageSize> {
    match name.trim().to_ascii_lowercase().as_str() {
        "a3" => Ok(A3),
        "a4" => Ok(A4),
        "a5" => Ok(A5),
        "letter" => Ok(LETTER),
        "legal" => Ok(LEGAL),
        _ => Err(Error::UnknownPageSize(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_names() {
        assert_eq!(by_name(" a4 ").unwrap(), A4);
        assert_eq!(by_name("LEGAL").unwrap(), LEGAL);
        assert!(matches!(by_name("b5"), Err(Error::UnknownPageSize(_))));
    }
}
