//! Fonts and the glyph metrics the layout engine measures text with.
//!
//! Layout only ever asks one question of a font: how wide is this string at
//! this size? That question is the [`GlyphMetrics`] trait. Anything that can
//! answer it can drive the word wrapper, including a fixed-width table in
//! tests. Fonts that also need to appear in a PDF are wrapped in [`Font`].

mod standard;
mod truetype;

pub use standard::StandardFont;
pub use truetype::TrueTypeFont;

use crate::refs::{ObjectReferences, RefType};
use crate::{PDFError, Pt};
use id_arena::Id;
use pdf_writer::{Finish, Name, Pdf};
use std::sync::Arc;

/// Measures the rendered width of text
pub trait GlyphMetrics {
    /// Width of `text` drawn on a single line at font size `size`
    fn text_width(&self, text: &str, size: Pt) -> Pt;
}

impl<T: GlyphMetrics + ?Sized> GlyphMetrics for &T {
    fn text_width(&self, text: &str, size: Pt) -> Pt {
        (**self).text_width(text, size)
    }
}

/// A font that can be placed in a [`Document`](crate::Document).
///
/// Cloning is cheap: embedded faces are shared.
#[derive(Debug, Clone)]
pub enum Font {
    /// One of the base-14 fonts, referenced by name
    Standard(StandardFont),
    /// An embedded TrueType / OpenType face
    TrueType(Arc<TrueTypeFont>),
}

impl Font {
    /// Parse a TrueType / OpenType font to embed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        Ok(Font::TrueType(Arc::new(TrueTypeFont::load(bytes)?)))
    }

    /// Distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.ascent(size),
            Font::TrueType(font) => font.ascent(size),
        }
    }

    /// Distance from the baseline to the bottom of the font; usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.descent(size),
            Font::TrueType(font) => font.descent(size),
        }
    }

    /// Bytes that select the glyphs for `text` in a content stream: single
    /// WinAnsi codes for standard fonts, big-endian glyph ids for embedded ones
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Standard(_) => standard::encode_winansi(text),
            Font::TrueType(font) => text
                .chars()
                .flat_map(|ch| font.glyph_id(ch).to_be_bytes())
                .collect(),
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        id: Id<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let font_index = id.index();
        match self {
            Font::Standard(font) => {
                let font_id = refs.gen(RefType::Font(font_index));
                let mut dict = writer.type1_font(font_id);
                dict.base_font(Name(font.base_font().as_bytes()));
                dict.encoding_predefined(Name(b"WinAnsiEncoding"));
                dict.finish();
                Ok(())
            }
            Font::TrueType(font) => font.write(refs, font_index, writer),
        }
    }
}

impl From<StandardFont> for Font {
    fn from(font: StandardFont) -> Self {
        Font::Standard(font)
    }
}

impl GlyphMetrics for Font {
    fn text_width(&self, text: &str, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.text_width(text, size),
            Font::TrueType(font) => font.text_width(text, size),
        }
    }
}
