use crate::export::{ExportFormat, RenderedDocument};
use crate::font::StandardFont;
use crate::layout::{layout_text_paginated, LineRole, Margins, PageGeometry, TextLayout};
use crate::pagesize::PageSize;
use crate::{colours, Colour, Document, Font, Info, PDFError, Page, Pt, SpanFont, SpanLayout};

/// Page geometry, fonts and output naming for a render.
///
/// The default reproduces the classic projects export: A4, Helvetica-Bold 16pt
/// "Projects" heading, Helvetica 11pt body on 16pt lines, 50pt margins with a
/// 60pt top margin.
///
/// ```
/// use cv_pdf::{RenderConfig, Pt};
///
/// let mut config = RenderConfig::default();
/// config.title("Selected Projects").body_size(Pt(10.0));
/// assert_eq!(config.geometry.title.as_deref(), Some("Selected Projects"));
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub geometry: PageGeometry,
    pub title_font: Font,
    /// Used both to draw body lines and to measure them while wrapping
    pub body_font: Font,
    pub colour: Colour,
    /// File name for the export, without extension
    pub filename: String,
    pub info: Option<Info>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            geometry: PageGeometry::default(),
            title_font: StandardFont::HelveticaBold.into(),
            body_font: StandardFont::Helvetica.into(),
            colour: colours::BLACK,
            filename: "projects".to_string(),
            info: Some(Info::new().title("Projects").clone()),
        }
    }
}

impl RenderConfig {
    pub fn page_size(&mut self, page_size: PageSize) -> &mut Self {
        self.geometry.page_size = page_size;
        self
    }

    pub fn margins(&mut self, margins: Margins) -> &mut Self {
        self.geometry.margins = margins;
        self
    }

    /// Set the first-page heading. Metadata still titled after the old
    /// heading follows the new one.
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        let title = title.to_string();
        if let Some(info) = &mut self.info {
            if info.title == self.geometry.title {
                info.title = Some(title.clone());
            }
        }
        self.geometry.title = Some(title);
        self
    }

    /// Start body text at the very top of the first page, with no heading
    pub fn without_title(&mut self) -> &mut Self {
        self.geometry.title = None;
        self
    }

    pub fn title_font<F: Into<Font>>(&mut self, font: F) -> &mut Self {
        self.title_font = font.into();
        self
    }

    pub fn body_font<F: Into<Font>>(&mut self, font: F) -> &mut Self {
        self.body_font = font.into();
        self
    }

    pub fn title_size(&mut self, size: Pt) -> &mut Self {
        self.geometry.title_size = size;
        self
    }

    pub fn title_advance(&mut self, advance: Pt) -> &mut Self {
        self.geometry.title_advance = advance;
        self
    }

    pub fn body_size(&mut self, size: Pt) -> &mut Self {
        self.geometry.body_size = size;
        self
    }

    pub fn line_height(&mut self, line_height: Pt) -> &mut Self {
        self.geometry.line_height = line_height;
        self
    }

    pub fn colour(&mut self, colour: Colour) -> &mut Self {
        self.colour = colour;
        self
    }

    pub fn filename<S: ToString>(&mut self, filename: S) -> &mut Self {
        self.filename = filename.to_string();
        self
    }

    pub fn info(&mut self, info: Option<Info>) -> &mut Self {
        self.info = info;
        self
    }

    /// Lay `text` out with this configuration's geometry and body font metrics
    pub fn layout(&self, text: &str) -> TextLayout {
        layout_text_paginated(text, &self.geometry, &self.body_font)
    }
}

fn ensure_not_empty(text: &str) -> Result<(), PDFError> {
    if text.trim().is_empty() {
        return Err(PDFError::EmptyDocument);
    }
    Ok(())
}

/// Build a [`Document`] holding one page per laid out page, with the title
/// and body fonts registered
pub fn document_from_layout(layout: &TextLayout, config: &RenderConfig) -> Document {
    let mut document = Document::default();
    if let Some(info) = &config.info {
        document.set_info(info.clone());
    }

    let title_font = SpanFont {
        id: document.add_font(config.title_font.clone()),
        size: config.geometry.title_size,
    };
    let body_font = SpanFont {
        id: document.add_font(config.body_font.clone()),
        size: config.geometry.body_size,
    };

    for laid_out in layout.pages.iter() {
        let mut page = Page::new(config.geometry.page_size, Some(config.geometry.margins));
        for line in laid_out.lines.iter() {
            let font = match line.role {
                LineRole::Title => title_font,
                LineRole::Body => body_font,
                LineRole::Spacer => continue,
            };
            page.add_span(SpanLayout {
                text: line.text.clone(),
                font,
                colour: config.colour,
                coords: (line.x, line.y),
            });
        }
        document.add_page(page);
    }

    document
}

/// Lay `text` out and render it to a PDF.
///
/// Fails with [`PDFError::EmptyDocument`] when `text` is empty or only
/// whitespace; any other text renders, however long its words or lines.
///
/// ```
/// use cv_pdf::{render, RenderConfig, PDFError};
///
/// let config = RenderConfig::default();
/// let pdf = render("- Widget Factory\n  - Builds widgets at scale", &config)?;
/// assert_eq!(pdf.content_type(), "application/pdf");
/// assert_eq!(pdf.filename, "projects.pdf");
/// assert_eq!(pdf.page_count, 1);
///
/// assert!(matches!(render("  \n ", &config), Err(PDFError::EmptyDocument)));
/// # Ok::<(), PDFError>(())
/// ```
pub fn render(text: &str, config: &RenderConfig) -> Result<RenderedDocument, PDFError> {
    ensure_not_empty(text)?;

    let layout = config.layout(text);
    let page_count = layout.page_count();
    let document = document_from_layout(&layout, config);

    let mut bytes: Vec<u8> = Vec::new();
    document.write(&mut bytes)?;
    log::debug!(
        "rendered {} page(s), {} bytes, to {:?}",
        page_count,
        bytes.len(),
        config.filename
    );

    Ok(RenderedDocument::new(
        ExportFormat::Pdf,
        &config.filename,
        bytes,
        page_count,
    ))
}

/// Lay `text` out exactly as [`render`] would, but export the wrapped lines
/// as plain text, pages separated by form feeds
pub fn render_text(text: &str, config: &RenderConfig) -> Result<RenderedDocument, PDFError> {
    ensure_not_empty(text)?;

    let layout = config.layout(text);
    let mut plain = layout.to_plain_text();
    plain.push('\n');

    Ok(RenderedDocument::new(
        ExportFormat::PlainText,
        &config.filename,
        plain.into_bytes(),
        layout.page_count(),
    ))
}
