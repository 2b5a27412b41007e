use crate::font::FontBook;
use crate::layout::StyleSpec;
use crate::units::Pt;
use derive_more::{Deref, DerefMut, From, Into};

/// The visual lines one block's text was broken into, in order
#[derive(Debug, Default, Clone, PartialEq, Eq, Deref, DerefMut, From, Into)]
pub struct WrappedLine(pub Vec<String>);

impl WrappedLine {
    /// The lines joined back together with single spaces
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}

/// Greedily break `text` into lines no wider than `max_width` when set in `style`.
///
/// Words are split on any whitespace and re-joined with single spaces. A word is added
/// to the current line if the whole candidate line, measured with the face for the
/// style's weight, still fits; otherwise it starts a new line. A word that is wider
/// than `max_width` on its own is never broken: it gets a line to itself and overflows.
/// Text with no words yields no lines.
pub fn wrap(text: &str, max_width: Pt, style: &StyleSpec, fonts: &FontBook) -> WrappedLine {
    let face = fonts.face(style.weight);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if face.width_of(&candidate, style.size) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    WrappedLine(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::layout::FontWeight;
    use proptest::prelude::*;

    fn body() -> StyleSpec {
        StyleSpec::new(FontWeight::Normal, Pt(10.0), colours::BLACK)
    }

    #[test]
    fn short_text_fits_on_one_line() {
        let fonts = FontBook::default();
        let lines = wrap("Hello world", Pt(500.0), &body(), &fonts);
        assert_eq!(lines.0, vec!["Hello world".to_string()]);
    }

    #[test]
    fn breaks_between_words() {
        let fonts = FontBook::default();
        // "aaaa" is 22.24pt at 10pt, so two words plus a space don't fit in 40pt
        let lines = wrap("aaaa aaaa aaaa", Pt(40.0), &body(), &fonts);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line == "aaaa"));
    }

    #[test]
    fn collapses_whitespace() {
        let fonts = FontBook::default();
        let lines = wrap("  one\t two   three ", Pt(500.0), &body(), &fonts);
        assert_eq!(lines.joined(), "one two three");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn overlong_word_sits_alone() {
        let fonts = FontBook::default();
        let lines = wrap(
            "a Pneumonoultramicroscopicsilicovolcanoconiosis b",
            Pt(50.0),
            &body(),
            &fonts,
        );
        assert_eq!(
            lines.0,
            vec![
                "a".to_string(),
                "Pneumonoultramicroscopicsilicovolcanoconiosis".to_string(),
                "b".to_string(),
            ]
        );
    }

    #[test]
    fn empty_text_has_no_lines() {
        let fonts = FontBook::default();
        assert!(wrap("", Pt(100.0), &body(), &fonts).is_empty());
        assert!(wrap(" \t ", Pt(100.0), &body(), &fonts).is_empty());
    }

    #[test]
    fn bold_text_wraps_sooner() {
        let fonts = FontBook::default();
        let text = lipsum::lipsum(60);
        let normal = wrap(&text, Pt(300.0), &body(), &fonts);
        let bold = wrap(
            &text,
            Pt(300.0),
            &body().with_weight(FontWeight::Bold),
            &fonts,
        );
        assert!(bold.len() >= normal.len());
    }

    proptest! {
        #[test]
        fn lines_fit_and_words_survive(
            words in prop::collection::vec("[a-zA-Z]{1,12}", 0..40),
            width in 30.0f32..400.0,
        ) {
            let fonts = FontBook::default();
            let style = body();
            let text = words.join(" ");
            let lines = wrap(&text, Pt(width), &style, &fonts);

            prop_assert_eq!(lines.joined(), text);
            for line in lines.iter() {
                let fits = fonts.width_of(line, style.weight, style.size) <= Pt(width);
                prop_assert!(fits || !line.contains(' '), "{:?} overflows", line);
            }
        }
    }
}
