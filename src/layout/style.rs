use crate::colour::{colours, Colour};
use crate::layout::BlockKind;
use crate::units::{Mm, Pt};
use serde::{Deserialize, Serialize};

/// The weight a block is set in. Formatting is a property of a whole block, never of a
/// span within it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Presentation of one kind of block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    pub weight: FontWeight,
    pub size: Pt,
    pub colour: Colour,
    /// Offset of the text from the left margin
    pub indent: Pt,
    /// Advance from one visual line to the next
    pub line_height: Pt,
    pub space_before: Pt,
    pub space_after: Pt,
}

impl StyleSpec {
    /// A style with no indentation or spacing and a line height of 1.2 × the font size
    pub fn new(weight: FontWeight, size: Pt, colour: Colour) -> StyleSpec {
        StyleSpec {
            weight,
            size,
            colour,
            indent: Pt(0.0),
            line_height: size * 1.2,
            space_before: Pt(0.0),
            space_after: Pt(0.0),
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> StyleSpec {
        self.weight = weight;
        self
    }

    pub fn with_indent<D: Into<Pt>>(mut self, indent: D) -> StyleSpec {
        self.indent = indent.into();
        self
    }

    pub fn with_line_height<D: Into<Pt>>(mut self, line_height: D) -> StyleSpec {
        self.line_height = line_height.into();
        self
    }

    pub fn with_space_before<D: Into<Pt>>(mut self, space: D) -> StyleSpec {
        self.space_before = space.into();
        self
    }

    pub fn with_space_after<D: Into<Pt>>(mut self, space: D) -> StyleSpec {
        self.space_after = space.into();
        self
    }

    /// Vertical space a block of `lines` visual lines consumes, spacing included
    pub fn block_height(&self, lines: usize) -> Pt {
        self.line_height * lines as f32 + self.space_before + self.space_after
    }
}

/// The fixed table mapping each textual block kind to its style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub heading1: StyleSpec,
    pub heading2: StyleSpec,
    pub heading3: StyleSpec,
    pub heading4: StyleSpec,
    pub bullet_item: StyleSpec,
    pub numbered_item: StyleSpec,
    pub bold_paragraph: StyleSpec,
    pub paragraph: StyleSpec,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let body = StyleSpec::new(FontWeight::Normal, Pt(10.0), colours::INK)
            .with_line_height(Mm(5.0));
        let heading = |size: f32, colour: Colour, line: f32, after: f32| {
            StyleSpec::new(FontWeight::Bold, Pt(size), colour)
                .with_line_height(Mm(line))
                .with_space_after(Mm(after))
        };

        StyleSheet {
            heading1: heading(16.0, colours::BRAND_BLUE, 7.0, 4.0),
            heading2: heading(14.0, colours::SLATE_700, 6.0, 3.0),
            heading3: heading(12.0, colours::SLATE_600, 5.0, 2.0),
            heading4: heading(11.0, colours::SLATE_500, 5.0, 2.0),
            bullet_item: body.with_indent(Mm(8.0)).with_space_after(Mm(1.0)),
            numbered_item: body.with_indent(Mm(12.0)).with_space_after(Mm(1.0)),
            bold_paragraph: body.with_weight(FontWeight::Bold),
            paragraph: body,
        }
    }
}

impl StyleSheet {
    /// The style for a block kind. Blank lines and rules aren't set as text and have none.
    pub fn get(&self, kind: BlockKind) -> Option<&StyleSpec> {
        match kind {
            BlockKind::Blank | BlockKind::Rule => None,
            BlockKind::Heading1 => Some(&self.heading1),
            BlockKind::Heading2 => Some(&self.heading2),
            BlockKind::Heading3 => Some(&self.heading3),
            BlockKind::Heading4 => Some(&self.heading4),
            BlockKind::BulletItem => Some(&self.bullet_item),
            BlockKind::NumberedItem => Some(&self.numbered_item),
            BlockKind::BoldParagraph => Some(&self.bold_paragraph),
            BlockKind::Paragraph => Some(&self.paragraph),
        }
    }
}

/// Presentation of a horizontal rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleStyle {
    /// Vertical space the rule occupies, the stroke sitting at its top
    pub height: Pt,
    pub colour: Colour,
    pub stroke_width: Pt,
}

impl Default for RuleStyle {
    fn default() -> Self {
        RuleStyle {
            height: Mm(8.0).into(),
            colour: colours::RULE_GREY,
            stroke_width: Mm(0.5).into(),
        }
    }
}

/// The title band stamped across the top of the first page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderStyle {
    pub height: Pt,
    pub fill: Colour,
    pub text_colour: Colour,
    pub title_size: Pt,
    /// Title baseline, measured from the top of the page
    pub title_baseline: Pt,
    pub caption_size: Pt,
    /// Baseline of the creation date and note, measured from the top of the page
    pub caption_baseline: Pt,
    /// Label put in front of the creation date
    pub created_label: String,
    /// Distance of the note's left edge from the right margin
    pub note_offset: Pt,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        HeaderStyle {
            height: Mm(35.0).into(),
            fill: colours::BRAND_BLUE,
            text_colour: colours::WHITE,
            title_size: Pt(18.0),
            title_baseline: Mm(22.0).into(),
            caption_size: Pt(10.0),
            caption_baseline: Mm(30.0).into(),
            created_label: "Created".to_string(),
            note_offset: Mm(50.0).into(),
        }
    }
}

/// The centered "page N of M" line at the bottom of every page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterStyle {
    /// Document label shown in front of the page count
    pub label: String,
    pub size: Pt,
    pub colour: Colour,
    /// Baseline, measured up from the bottom of the page
    pub baseline_from_bottom: Pt,
}

impl Default for FooterStyle {
    fn default() -> Self {
        FooterStyle {
            label: "Change Management".to_string(),
            size: Pt(8.0),
            colour: colours::FOOTER_GREY,
            baseline_from_bottom: Mm(10.0).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes_follow_heading_levels() {
        let sheet = StyleSheet::default();
        let sizes: Vec<f32> = [
            BlockKind::Heading1,
            BlockKind::Heading2,
            BlockKind::Heading3,
            BlockKind::Heading4,
            BlockKind::Paragraph,
        ]
        .into_iter()
        .map(|kind| sheet.get(kind).unwrap().size.0)
        .collect();
        assert_eq!(sizes, vec![16.0, 14.0, 12.0, 11.0, 10.0]);
    }

    #[test]
    fn numbered_items_indent_further_than_bullets() {
        let sheet = StyleSheet::default();
        let bullet: Pt = Mm(8.0).into();
        let numbered: Pt = Mm(12.0).into();
        assert_eq!(sheet.bullet_item.indent, bullet);
        assert_eq!(sheet.numbered_item.indent, numbered);
        assert_eq!(sheet.bold_paragraph.weight, FontWeight::Bold);
        assert!(sheet.get(BlockKind::Rule).is_none());
    }

    #[test]
    fn block_height_includes_spacing() {
        let style = StyleSpec::new(FontWeight::Normal, Pt(10.0), colours::BLACK)
            .with_line_height(Pt(12.0))
            .with_space_before(Pt(2.0))
            .with_space_after(Pt(3.0));
        assert_eq!(style.block_height(3), Pt(41.0));
        assert_eq!(style.block_height(0), Pt(5.0));
    }
}
