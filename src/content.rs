//! Content stream generation for a page's text.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{SpanFont, SpanLayout};
use crate::PDFError;
use id_arena::Arena;
use std::io::Write;

/// Renders spans to PDF content stream operators. Font and fill colour are
/// only re-selected when they change from one span to the next.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_spans(
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, PDFError> {
    let mut content: Vec<u8> = Vec::default();
    if spans.is_empty() {
        return Ok(content);
    }

    write!(&mut content, "q\n")?;

    let mut current_font: Option<SpanFont> = None;
    let mut current_colour: Option<Colour> = None;

    for span in spans.iter() {
        let font = fonts.get(span.font.id).ok_or(PDFError::FontMissing)?;

        if current_font != Some(span.font) {
            write!(
                &mut content,
                "/F{} {} Tf\n",
                span.font.id.index(),
                *span.font.size
            )?;
            current_font = Some(span.font);
        }
        if current_colour != Some(span.colour) {
            write!(&mut content, "{}\n", span.colour.fill_operator())?;
            current_colour = Some(span.colour);
        }

        write!(&mut content, "BT\n")?;
        write!(&mut content, "{} {} Td\n", *span.coords.0, *span.coords.1)?;
        write!(&mut content, "<")?;
        for byte in font.encode(&span.text) {
            write!(&mut content, "{byte:02x}")?;
        }
        write!(&mut content, "> Tj\n")?;
        write!(&mut content, "ET\n")?;
    }

    write!(&mut content, "Q\n")?;
    Ok(content)
}
