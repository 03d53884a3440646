use cv_pdf::projects::{default_projects, projects_outline};
use cv_pdf::{render, render_text, Info, RenderConfig};

fn main() {
    // set RUST_LOG=debug to watch pages being laid out
    env_logger::init();

    // turn the sample projects into a bulleted outline
    let projects = default_projects();
    let text = projects_outline(&projects);

    // the default configuration is an A4 page with a "Projects" heading;
    // the PDF's keywords are the technologies the projects use
    let mut config = RenderConfig::default();
    config.info(Some(Info::for_projects(&projects)));

    // render it, once as a PDF and once as the wrapped plain text
    let pdf = render(&text, &config).expect("projects are not empty");
    let txt = render_text(&text, &config).expect("projects are not empty");

    // the caller owns the results; here they go to the working directory
    for doc in [pdf, txt] {
        let path = doc.save(".").unwrap();
        println!("{} ({}, {} page(s))", path.display(), doc.content_type(), doc.page_count);
    }
}
