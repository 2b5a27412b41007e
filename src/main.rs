//! md-paginator - render constrained Markdown documents to paginated PDF

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use md_paginator::layout::{today, PaginatedDocument, Paginator};
use md_paginator::{Font, FontBook, Info, LayoutConfig, PageContents, PdfDocument};

#[derive(Parser)]
#[command(name = "md-paginator")]
#[command(version, about = "Render Markdown documents to paginated PDF", long_about = None)]
#[command(after_help = "EXAMPLES:
    md-paginator story.md                       Write story.pdf
    md-paginator plan.md -o out.pdf --title \"Communication plan\"
    md-paginator plan.md --dump                 Print the page layout instead")]
struct Cli {
    /// Markdown input file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PDF file (defaults to the input with a .pdf extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Document title (defaults to the input file name)
    #[arg(short, long)]
    title: Option<String>,

    /// Creation date shown in the header band (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Document label shown in every footer
    #[arg(long)]
    label: Option<String>,

    /// Short note at the right of the header band, such as a session id
    #[arg(long)]
    note: Option<String>,

    /// JSON layout configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Page size: a3, a4, a5, letter or legal
    #[arg(long, value_name = "NAME")]
    page_size: Option<String>,

    /// TrueType font for regular text, instead of Helvetica
    #[arg(long, value_name = "FILE", requires = "bold_font")]
    font: Option<PathBuf>,

    /// TrueType font for bold text, instead of Helvetica-Bold
    #[arg(long, value_name = "FILE", requires = "font")]
    bold_font: Option<PathBuf>,

    /// Print the laid out pages instead of writing a PDF
    #[arg(long)]
    dump: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> md_paginator::Result<()> {
    let mut config = match &cli.config {
        Some(path) => LayoutConfig::from_json_file(path)?,
        None => LayoutConfig::default(),
    };
    if let Some(name) = &cli.page_size {
        config = config.with_page_size_named(name)?;
    }
    if let Some(label) = &cli.label {
        config.footer.label = label.clone();
    }

    let fonts = match (&cli.font, &cli.bold_font) {
        (Some(regular), Some(bold)) => {
            FontBook::embedded(Font::from_file(regular)?, Font::from_file(bold)?)
        }
        _ => FontBook::default(),
    };

    let body = std::fs::read_to_string(&cli.input)?;
    let title = cli.title.clone().unwrap_or_else(|| file_title(&cli.input));
    let date = cli.date.clone().unwrap_or_else(today);

    let paginator = Paginator::new(&config, &fonts);
    let mut document = paginator.paginate(&title, &body);
    let mut decorator = paginator.decorator();
    if let Some(note) = &cli.note {
        decorator = decorator.with_note(note);
    }
    decorator.finalize(&mut document.pages, &title, &date);

    if cli.dump {
        dump(&document);
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("pdf"));
    let mut info = Info::new();
    info.title(&title).subject(&config.footer.label);
    PdfDocument::new(&document, &fonts)
        .with_info(info)
        .save(&output)?;

    log::info!(
        "wrote {} page(s) to {}",
        document.page_count(),
        output.display()
    );
    Ok(())
}

fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Document".to_string())
}

fn dump(document: &PaginatedDocument) {
    println!("{} ({} pages)", document.title, document.page_count());
    for page in document.pages.iter() {
        println!("--- page {}", page.index + 1);
        if let Some(header) = &page.header {
            for line in header.lines.iter() {
                println!("header {:>7.1} {}", *line.baseline, line.text);
            }
        }
        for item in page.contents.iter() {
            match item {
                PageContents::Text(line) => println!(
                    "text   {:>7.1} {:>5.1} {:?} {}",
                    *line.baseline, *line.x, line.style.weight, line.text
                ),
                PageContents::Marker(marker) => {
                    println!("marker {:>7.1} {:>5.1} {}", *marker.baseline, *marker.x, marker.text)
                }
                PageContents::Rule(rule) => println!("rule   {:>7.1}", *rule.y),
            }
        }
        if let Some(footer) = &page.footer {
            println!("footer {:>7.1} {}", *footer.baseline, footer.text);
        }
    }
}
