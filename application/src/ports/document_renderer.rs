//! Document renderer port
//!
//! Turns the format-independent [`ExportDocument`] into file bytes.

use thiserror::Error;
use valuecards_domain::ExportDocument;

/// Errors raised while rendering a document
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(String),
}

/// Renders an export document into a concrete file format
pub trait DocumentRenderer: Send + Sync {
    /// MIME type of the produced bytes
    fn content_type(&self) -> &'static str;

    /// File extension without the leading dot
    fn extension(&self) -> &'static str;

    /// Render the document. Identical documents must give identical bytes.
    fn render(&self, document: &ExportDocument) -> Result<Vec<u8>, RenderError>;
}
