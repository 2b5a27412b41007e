use md_paginator::layout::{classify_lines, wrap, BlockKind, Paginator, PaginatedDocument};
use md_paginator::{FontBook, LayoutConfig, PageContents, Pt};
use proptest::prelude::*;

fn render(body: &str) -> PaginatedDocument {
    let config = LayoutConfig::default();
    let fonts = FontBook::default();
    Paginator::new(&config, &fonts).render("Change story", body, "19.10.2026")
}

#[test]
fn mixed_body_classifies_into_expected_blocks() {
    let body = "# Title\n\nSome **bold** line\n\n- item one\n- item two";
    let blocks: Vec<_> = classify_lines(body)
        .into_iter()
        .filter(|b| b.kind != BlockKind::Blank)
        .collect();

    let summary: Vec<(BlockKind, &str, Option<&str>)> = blocks
        .iter()
        .map(|b| (b.kind, b.text.as_str(), b.marker.as_deref()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (BlockKind::Heading1, "Title", None),
            (BlockKind::Paragraph, "Some bold line", None),
            (BlockKind::BulletItem, "item one", Some("•")),
            (BlockKind::BulletItem, "item two", Some("•")),
        ]
    );

    let doc = render(body);
    assert_eq!(doc.page_count(), 1);
    assert_eq!(
        doc.body_lines().collect::<Vec<_>>(),
        vec!["Title", "Some bold line", "item one", "item two"]
    );
}

#[test]
fn overflowing_body_breaks_without_losing_lines() {
    let body = (0..40)
        .map(|i| format!("Paragraph {i}: {}", lipsum::lipsum(30)))
        .collect::<Vec<_>>()
        .join("\n\n");
    let doc = render(&body);
    assert!(doc.page_count() > 1);

    // the lines every block wraps to, in order, regardless of where they were placed
    let config = LayoutConfig::default();
    let fonts = FontBook::default();
    let expected: Vec<String> = classify_lines(&body)
        .into_iter()
        .filter(|b| b.kind == BlockKind::Paragraph)
        .flat_map(|b| wrap(&b.text, config.content_width(), &config.styles.paragraph, &fonts).0)
        .collect();
    let placed: Vec<&str> = doc.body_lines().collect();
    assert_eq!(placed, expected);

    // the first line of page 2 directly follows the last line of page 1
    let on_first = doc.pages[0].lines().count();
    let last_on_first = doc.pages[0].lines().last().unwrap();
    let first_on_second = doc.pages[1].lines().next().unwrap();
    assert_eq!(expected[on_first - 1], last_on_first.text);
    assert_eq!(expected[on_first], first_on_second.text);
}

#[test]
fn body_lines_stay_inside_the_margins() {
    let body = (0..60)
        .map(|i| format!("- item {i} {}", lipsum::lipsum(12)))
        .collect::<Vec<_>>()
        .join("\n");
    let doc = render(&body);
    let config = LayoutConfig::default();
    let bottom = config.page_size.1 - config.margins.bottom;

    for page in doc.pages.iter() {
        for line in page.lines() {
            assert!(line.baseline <= bottom, "page {} overflows", page.index + 1);
            assert!(line.x >= config.margins.left);
        }
    }
}

#[test]
fn footers_agree_on_the_page_count() {
    let body = (0..120)
        .map(|i| format!("## Section {i}\nText for section {i}."))
        .collect::<Vec<_>>()
        .join("\n");
    let doc = render(&body);
    let total = doc.page_count();
    assert!(total > 2);

    for (i, page) in doc.pages.iter().enumerate() {
        let footer = page.footer.as_ref().expect("every page has a footer");
        assert_eq!(
            footer.text,
            format!("Change Management | page {} of {}", i + 1, total)
        );
        assert_eq!(page.header.is_some(), i == 0);
    }
}

#[test]
fn only_the_first_page_reserves_the_header_band() {
    let body = (0..80)
        .map(|i| format!("Line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let doc = render(&body);
    let config = LayoutConfig::default();

    let first = doc.pages[0].lines().next().unwrap();
    let second = doc.pages[1].lines().next().unwrap();
    assert!(first.baseline > config.header.height);
    assert!(second.baseline < config.header.height);
}

#[test]
fn rules_and_markers_are_placed() {
    let doc = render("Intro\n---\n1. First\n2. Second\n***");
    let page = &doc.pages[0];

    let rules = page
        .contents
        .iter()
        .filter(|c| matches!(c, PageContents::Rule(_)))
        .count();
    let markers: Vec<&str> = page
        .contents
        .iter()
        .filter_map(|c| match c {
            PageContents::Marker(m) => Some(m.text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(rules, 2);
    assert_eq!(markers, vec!["1.", "2."]);
}

#[test]
fn a_single_block_taller_than_a_page_overflows() {
    let body = lipsum::lipsum(3000);
    let doc = render(&body);
    assert_eq!(doc.page_count(), 1);
    let config = LayoutConfig::default();
    let last = doc.pages[0].lines().last().unwrap();
    assert!(last.baseline > config.page_size.1);
}

#[test]
fn empty_body_still_gets_header_and_footer() {
    let doc = render("");
    assert_eq!(doc.page_count(), 1);
    let page = &doc.pages[0];
    assert!(page.is_empty());
    assert!(page.header.is_some());
    assert_eq!(
        page.footer.as_ref().unwrap().text,
        "Change Management | page 1 of 1"
    );
}

#[test]
fn custom_layouts_change_the_flow() {
    let mut config = LayoutConfig::default().with_page_size_named("a5").unwrap();
    config.footer.label = "Partner selection".to_string();
    config.styles.paragraph.line_height = Pt(30.0);
    let fonts = FontBook::default();
    let body = (0..30).map(|i| format!("row {i}")).collect::<Vec<_>>().join("\n");

    let doc = Paginator::new(&config, &fonts).render("Partners", &body, "today");
    let default = render(&body);

    assert!(doc.page_count() > default.page_count());
    assert!(doc.pages[0]
        .footer
        .as_ref()
        .unwrap()
        .text
        .starts_with("Partner selection | page 1 of "));
}

proptest! {
    #[test]
    fn paragraphs_round_trip_without_emphasis(
        paragraphs in prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}| \\*\\*[a-z]{1,8}\\*\\*){0,8}", 1..8)
    ) {
        let body = paragraphs.join("\n\n");
        let texts: Vec<String> = classify_lines(&body)
            .into_iter()
            .filter(|b| b.kind != BlockKind::Blank)
            .map(|b| b.text)
            .collect();
        let expected: Vec<String> = paragraphs.iter().map(|p| p.replace("**", "")).collect();
        prop_assert_eq!(texts, expected);
    }

    #[test]
    fn every_footer_counts_the_final_pages(count in 0usize..150) {
        let body = (0..count).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let doc = render(&body);
        let suffix = format!(" of {}", doc.page_count());
        for page in doc.pages.iter() {
            prop_assert!(page.footer.as_ref().unwrap().text.ends_with(&suffix));
        }
    }
}
