//! Paginates a small Markdown dialect into fixed-layout pages and renders them to PDF.
//!
//! Each input line is classified on its own (headings, bullets, numbered items, rules,
//! bold paragraphs, plain paragraphs), word-wrapped with real font metrics and flowed
//! onto pages. The first page gets a coloured title band, every page a "page N of M"
//! footer.
//!
//! ```
//! use md_paginator::{export_pdf, FontBook, LayoutConfig};
//!
//! let body = "# Change story\n\nWhy we change.\n\n- Faster reviews\n- Fewer handovers";
//! let pdf = export_pdf(
//!     "Change story",
//!     body,
//!     "19.10.2026",
//!     &LayoutConfig::default(),
//!     &FontBook::default(),
//! )
//! .expect("can render");
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Classifying, wrapping and placing text on pages
pub mod layout;

mod outline;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;

use layout::Paginator;

/// Lay out, decorate and render a document to PDF bytes in one go
pub fn export_pdf(
    title: &str,
    body: &str,
    created_date: &str,
    config: &LayoutConfig,
    fonts: &FontBook,
) -> Result<Vec<u8>> {
    let document = Paginator::new(config, fonts).render(title, body, created_date);
    PdfDocument::new(&document, fonts).to_bytes()
}
