use md_paginator::layout::{today, Paginator};
use md_paginator::{FontBook, Info, LayoutConfig, PdfDocument};

fn main() {
    let body = (1..=12)
        .map(|i| {
            format!(
                "## Section {i}\n\n{}\n\n- {}\n- {}\n\n---",
                lipsum::lipsum(120),
                lipsum::lipsum(8),
                lipsum::lipsum(14)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    let body = format!("# Lorem ipsum\n\n**{}**\n\n{body}", lipsum::lipsum(6));

    let config = LayoutConfig::default();
    let fonts = FontBook::default();
    let doc = Paginator::new(&config, &fonts).render("Lorem ipsum", &body, &today());

    let mut info = Info::new();
    info.title("Lorem ipsum").author("md-paginator");
    PdfDocument::new(&doc, &fonts)
        .with_info(info)
        .save("lorem-ipsum.pdf")
        .expect("can write lorem-ipsum.pdf");
    println!("wrote {} pages to lorem-ipsum.pdf", doc.page_count());
}
