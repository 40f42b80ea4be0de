//! Document renderers implementing the `DocumentRenderer` port.

mod docx;

pub use docx::{DOCX_CONTENT_TYPE, DocxRenderer};
