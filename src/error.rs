use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error("there is no text to lay out")]
    /// The input text was empty or contained only whitespace
    EmptyDocument,

    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("the page order refers to a page that is not in the document")]
    /// The page order refers to a page that no longer exists
    PageMissing,

    #[error("a span refers to a font that is not in the document")]
    /// A span was drawn with a font id from another document
    FontMissing,

    #[error("the font has no unicode glyphs that can be embedded")]
    /// An embedded font has no usable cmap
    MissingGlyphs,
}
