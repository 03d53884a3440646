//! Finished documents, handed back to whoever asked for them.
//!
//! A render produces a [`RenderedDocument`] value; nothing is cached or kept
//! around between renders. Whatever the caller holds is the latest document.

use crate::PDFError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The kinds of file a render can produce
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    PlainText,
}

impl ExportFormat {
    /// MIME type to serve the bytes with
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::PlainText => "text/plain; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::PlainText => "txt",
        }
    }
}

/// A rendered file: its bytes plus the name and content type to offer it under
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub format: ExportFormat,
    pub filename: String,
    pub page_count: usize,
    bytes: Vec<u8>,
}

/// Keep file names to characters that are safe on every platform
fn sanitize_stem(stem: &str) -> String {
    let cleaned: String = stem
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        "document".to_string()
    } else {
        cleaned.to_string()
    }
}

impl RenderedDocument {
    /// Wrap rendered bytes. `stem` becomes the file name, with the format's
    /// extension appended unless it is already there.
    pub fn new(format: ExportFormat, stem: &str, bytes: Vec<u8>, page_count: usize) -> Self {
        let stem = sanitize_stem(stem);
        let suffix = format!(".{}", format.extension());
        let filename = if stem.to_ascii_lowercase().ends_with(&suffix) {
            stem
        } else {
            format!("{stem}{suffix}")
        };

        RenderedDocument {
            format,
            filename,
            page_count,
            bytes,
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Stream the file to any writer, e.g. an HTTP response body
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<(), PDFError> {
        w.write_all(&self.bytes)?;
        Ok(())
    }

    /// Save the file into `dir` under its own file name, returning the full path
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, PDFError> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        log::info!("saved {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}
