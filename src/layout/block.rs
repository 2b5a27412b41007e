use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Three or more of the same rule character, and nothing else
static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-{3,}|_{3,}|\*{3,})$").expect("valid rule regex"));

/// A setext-style underline, which is dropped rather than drawn
static UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^=+$").expect("valid underline regex"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+").expect("valid bullet regex"));

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+\.)\s+").expect("valid numbered item regex"));

/// Marker drawn in front of bullet items
pub const BULLET_MARKER: &str = "•";

/// The kind of a block, as decided from the shape of its source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Blank,
    Rule,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    BulletItem,
    NumberedItem,
    BoldParagraph,
    Paragraph,
}

impl BlockKind {
    /// Whether the block is set as text (and therefore has a style)
    pub fn is_textual(&self) -> bool {
        !matches!(self, BlockKind::Blank | BlockKind::Rule)
    }

    pub fn is_list_item(&self) -> bool {
        matches!(self, BlockKind::BulletItem | BlockKind::NumberedItem)
    }
}

/// One classified input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// The content to render, with the markdown syntax stripped
    pub text: String,
    /// `•` for bullet items, the literal `N.` for numbered items
    pub marker: Option<String>,
    /// List items whose source contained `**` are set entirely in bold
    pub bold: bool,
}

impl Block {
    fn new<S: Into<String>>(kind: BlockKind, text: S) -> Block {
        Block {
            kind,
            text: text.into(),
            marker: None,
            bold: false,
        }
    }

    fn list_item(kind: BlockKind, marker: &str, rest: &str) -> Block {
        Block {
            kind,
            text: rest.replace("**", ""),
            marker: Some(marker.to_string()),
            bold: rest.contains("**"),
        }
    }
}

/// Classify a single line of input.
///
/// Each line is judged on its own, with no memory of the lines around it. The rules are
/// tried in order and the first that matches wins, so `***` is a rule rather than a
/// bold paragraph and `- item` is a bullet rather than a paragraph. Returns `None` only
/// for a line made up entirely of `=`, which is dropped from the output.
///
/// ```
/// use md_paginator::layout::{classify, BlockKind};
///
/// let block = classify("  ## Rollout plan").unwrap();
/// assert_eq!(block.kind, BlockKind::Heading2);
/// assert_eq!(block.text, "Rollout plan");
/// assert!(classify("=====").is_none());
/// ```
pub fn classify(line: &str) -> Option<Block> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Some(Block::new(BlockKind::Blank, ""));
    }
    if RULE.is_match(trimmed) {
        return Some(Block::new(BlockKind::Rule, ""));
    }
    if UNDERLINE.is_match(trimmed) {
        return None;
    }

    if let Some(text) = heading_text(trimmed, "#") {
        return Some(Block::new(BlockKind::Heading1, text));
    }
    if let Some(text) = heading_text(trimmed, "##") {
        return Some(Block::new(BlockKind::Heading2, text));
    }
    if let Some(text) = heading_text(trimmed, "###") {
        return Some(Block::new(BlockKind::Heading3, text));
    }
    if trimmed.starts_with("####") {
        return Some(Block::new(
            BlockKind::Heading4,
            trimmed.trim_start_matches('#').trim_start(),
        ));
    }

    if let Some(found) = BULLET.find(trimmed) {
        return Some(Block::list_item(
            BlockKind::BulletItem,
            BULLET_MARKER,
            &trimmed[found.end()..],
        ));
    }
    if let Some(captures) = NUMBERED.captures(trimmed) {
        let whole = captures.get(0).map_or(0, |m| m.end());
        let marker = captures.get(1).map_or("", |m| m.as_str());
        return Some(Block::list_item(
            BlockKind::NumberedItem,
            marker,
            &trimmed[whole..],
        ));
    }

    if trimmed.len() > 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
        let inner = &trimmed[2..trimmed.len() - 2];
        return Some(Block::new(BlockKind::BoldParagraph, inner));
    }

    Some(Block::new(BlockKind::Paragraph, trimmed.replace("**", "")))
}

/// The text after `hashes` if they are followed by whitespace
fn heading_text<'l>(line: &'l str, hashes: &str) -> Option<&'l str> {
    let rest = line.strip_prefix(hashes)?;
    rest.starts_with(char::is_whitespace)
        .then(|| rest.trim_start())
}

/// Classify every line of a body, in order, leaving out dropped lines
pub fn classify_lines(body: &str) -> Vec<Block> {
    body.split('\n').filter_map(classify).collect()
}
