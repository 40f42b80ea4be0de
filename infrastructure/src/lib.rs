//! Infrastructure layer for value-cards
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod access;
pub mod config;
pub mod export;
pub mod llm;

// Re-export commonly used types
pub use access::SharedSecretGate;
pub use config::{
    ConfigLoader, ConfigValidationError, FileAccessConfig, FileBehaviorConfig, FileConfig,
    FileEnhancementConfig, FileExportConfig, FileOutputConfig,
};
pub use export::{DOCX_CONTENT_TYPE, DocxRenderer};
pub use llm::OpenAiGateway;
