//! Export Document use case
//!
//! Builds the export document from a session and renders it to bytes.

use crate::config::ExportSettings;
use crate::ports::document_renderer::{DocumentRenderer, RenderError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use valuecards_domain::ValuesSession;

/// Errors that can occur during export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A rendered document ready to be saved or downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write the document. A directory target receives the fixed file name.
    pub fn save(&self, target: &Path) -> Result<PathBuf, ExportError> {
        let path = if target.is_dir() {
            target.join(&self.file_name)
        } else {
            target.to_path_buf()
        };
        std::fs::write(&path, &self.bytes).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Use case for producing the export document
pub struct ExportDocumentUseCase<R: DocumentRenderer + 'static> {
    renderer: Arc<R>,
    settings: ExportSettings,
}

impl<R: DocumentRenderer + 'static> ExportDocumentUseCase<R> {
    pub fn new(renderer: Arc<R>) -> Self {
        Self {
            renderer,
            settings: ExportSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ExportSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Render the session. Reads no clock or other hidden state, so the same
    /// session always gives the same bytes.
    pub fn execute(&self, session: &ValuesSession) -> Result<ExportArtifact, ExportError> {
        let document = session.export_document(&self.settings.title);
        let bytes = self.renderer.render(&document)?;

        info!(
            "Rendered {} document: {} blocks, {} bytes",
            self.renderer.extension(),
            document.blocks().len(),
            bytes.len()
        );

        Ok(ExportArtifact {
            file_name: self.settings.file_name.clone(),
            content_type: self.renderer.content_type(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuecards_domain::{Catalog, ExportDocument};

    /// Renders the plain-text layout as bytes
    struct TextRenderer;

    impl DocumentRenderer for TextRenderer {
        fn content_type(&self) -> &'static str {
            "text/plain"
        }

        fn extension(&self) -> &'static str {
            "txt"
        }

        fn render(&self, document: &ExportDocument) -> Result<Vec<u8>, RenderError> {
            Ok(document.to_plain_text().into_bytes())
        }
    }

    fn session() -> ValuesSession {
        ValuesSession::new(Arc::new(Catalog::standard()))
    }

    #[test]
    fn test_export_is_repeatable() {
        let use_case = ExportDocumentUseCase::new(Arc::new(TextRenderer));
        let mut s = session();
        s.toggle("Honesty", None).unwrap();

        let first = use_case.execute(&s).unwrap();
        let second = use_case.execute(&s).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.file_name, "my_values_statements.docx");
    }

    #[test]
    fn test_empty_session_exports_placeholders() {
        let use_case = ExportDocumentUseCase::new(Arc::new(TextRenderer));
        let artifact = use_case.execute(&session()).unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.contains("Tier 2 Values List"));
        assert!(text.contains("No values assigned"));
    }

    #[test]
    fn test_save_into_directory_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = ExportDocumentUseCase::new(Arc::new(TextRenderer)).with_settings(
            ExportSettings {
                title: "Mine".into(),
                file_name: "values.docx".into(),
            },
        );
        let artifact = use_case.execute(&session()).unwrap();

        let path = artifact.save(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("values.docx"));
        assert!(std::fs::read_to_string(path).unwrap().starts_with("Mine"));
    }
}
