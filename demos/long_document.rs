use cv_pdf::layout::Margins;
use cv_pdf::{pagesize, render, Font, In, RenderConfig};

fn main() {
    env_logger::init();

    // a few thousand words of filler, in paragraphs
    let text = (0..12)
        .map(|_| lipsum::lipsum(250))
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut config = RenderConfig::default();
    config
        .page_size(pagesize::LETTER)
        .margins(Margins::all(In(0.75)))
        .title("Lorem Ipsum")
        .filename("long-document");

    // optionally measure and draw the body with a TrueType font given on the command line
    if let Some(path) = std::env::args().nth(1) {
        let bytes = std::fs::read(&path).expect("can read font file");
        let font = Font::load(bytes).expect("can load font");
        config.body_font(font);
    }

    let pdf = render(&text, &config).unwrap();
    let path = pdf.save(".").unwrap();
    println!("{} with {} page(s)", path.display(), pdf.page_count);
}
