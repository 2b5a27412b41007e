//! Turning markdown text into positioned lines on fixed-size pages.
//!
//! Layout happens in stages, each usable on its own:
//!
//! - [`classify`](crate::layout::classify) decides what kind of block a single input line is
//! - [`wrap`](crate::layout::wrap) breaks a block's text into lines that fit the content width
//! - [`PageFlow`](crate::layout::PageFlow) places wrapped blocks onto pages, breaking between blocks
//! - [`Paginator`](crate::layout::Paginator) drives the three above over a whole document
//! - [`Decorator`](crate::layout::Decorator) stamps the header band and footers once the page count is known
//!
//! All positions are measured from the top-left corner of the page, `y` growing
//! downwards; conversion to PDF's bottom-up coordinates happens when writing.
//!
//! # Example
//!
//! ```
//! use md_paginator::{FontBook, LayoutConfig};
//! use md_paginator::layout::Paginator;
//!
//! let config = LayoutConfig::default();
//! let fonts = FontBook::default();
//! let body = "# Why change\n\nThe old process is **slow**.\n\n1. Decide\n2. Announce";
//!
//! let doc = Paginator::new(&config, &fonts).render("Change story", body, "19.10.2026");
//! let footer = doc.pages[0].footer.as_ref().unwrap();
//! assert_eq!(footer.text, "Change Management | page 1 of 1");
//! ```

mod block;
mod decorate;
mod flow;
mod margins;
mod paginator;
mod style;
mod wrap;

pub use block::*;
pub use decorate::*;
pub use flow::*;
pub use margins::*;
pub use paginator::*;
pub use style::*;
pub use wrap::*;
