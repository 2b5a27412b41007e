use crate::error::Result;
use crate::layout::{FooterStyle, HeaderStyle, Margins, RuleStyle, StyleSheet};
use crate::pagesize::{self, PageSize};
use crate::units::{Mm, Pt};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything that decides how a document is laid out.
///
/// The defaults produce an A4 document with 20 mm margins, a 35 mm title band on the
/// first page and the body set in 10 pt Helvetica. Any subset of the fields can be
/// given in JSON; missing fields keep their defaults:
///
/// ```
/// use md_paginator::{LayoutConfig, Pt};
///
/// let config = LayoutConfig::from_json_str(r#"{ "footer": { "label": "Rollout" } }"#).unwrap();
/// assert_eq!(config.footer.label, "Rollout");
/// assert_eq!(config.footer.size, Pt(8.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width and height of every page
    pub page_size: PageSize,
    pub margins: Margins,
    /// Where the body starts on the first page, below the header band
    pub first_page_top: Pt,
    /// Vertical space a blank input line leaves
    pub blank_line_spacing: Pt,
    /// Distance of list markers from the left margin
    pub marker_offset: Pt,
    pub rule: RuleStyle,
    pub styles: StyleSheet,
    pub header: HeaderStyle,
    pub footer: FooterStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page_size: pagesize::A4,
            margins: Margins::default(),
            first_page_top: Mm(50.0).into(),
            blank_line_spacing: Mm(4.0).into(),
            marker_offset: Mm(2.0).into(),
            rule: RuleStyle::default(),
            styles: StyleSheet::default(),
            header: HeaderStyle::default(),
            footer: FooterStyle::default(),
        }
    }
}

impl LayoutConfig {
    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<LayoutConfig> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<LayoutConfig> {
        let json = std::fs::read_to_string(path)?;
        LayoutConfig::from_json_str(&json)
    }

    /// Use a page size by name, such as `"a4"` or `"letter"`
    pub fn with_page_size_named(mut self, name: &str) -> Result<LayoutConfig> {
        self.page_size = pagesize::by_name(name)?;
        Ok(self)
    }

    /// Width available to text between the margins
    pub fn content_width(&self) -> Pt {
        self.margins.content_width(self.page_size.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_json_is_the_default() {
        let config = LayoutConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn partial_json_overrides_single_fields() {
        let config = LayoutConfig::from_json_str(
            r#"{ "page_size": [612.0, 792.0], "styles": { "paragraph": {
                "weight": "bold", "size": 11.0, "colour": { "grey": { "g": 0.0 } },
                "indent": 0.0, "line_height": 14.0, "space_before": 0.0, "space_after": 2.0
            } } }"#,
        )
        .unwrap();
        assert_eq!(config.page_size, pagesize::LETTER);
        assert_eq!(config.styles.paragraph.size, Pt(11.0));
        assert_eq!(config.styles.heading1, StyleSheet::default().heading1);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = LayoutConfig::from_json_str("{ \"margins\": 3 }").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn reads_config_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{ "blank_line_spacing": 6.0 }"#).unwrap();
        let config = LayoutConfig::from_json_file(&path).unwrap();
        assert_eq!(config.blank_line_spacing, Pt(6.0));
    }

    #[test]
    fn content_width_of_a4() {
        let config = LayoutConfig::default().with_page_size_named("A4").unwrap();
        let expected = pagesize::A4.0 - config.margins.left - config.margins.right;
        assert_eq!(config.content_width(), expected);
        assert!(LayoutConfig::default().with_page_size_named("b7").is_err());
    }
}
