//! Lays plain text out over fixed-size pages and renders it to PDF.
//!
//! Built for CV "Projects" sections: text is wrapped word by word against real
//! glyph widths, flows onto new pages as needed and comes back as a
//! [`RenderedDocument`] the caller owns.
//!
//! ```
//! use cv_pdf::projects::{default_projects, projects_outline};
//! use cv_pdf::{render, RenderConfig};
//!
//! let text = projects_outline(&default_projects());
//! let pdf = render(&text, &RenderConfig::default()).expect("text is not empty");
//! assert!(pdf.as_bytes().starts_with(b"%PDF-"));
//! ```

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

/// Finished, caller-owned render results
pub mod export;
pub use export::{ExportFormat, RenderedDocument};

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Margins, page geometry and the paginating word-wrap engine
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

/// Text assembly for CV project sections
pub mod projects;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod units;
pub use units::*;

/// Re-export PDF-writer, for callers that want to post-process documents
pub use pdf_writer;
