//! Application layer for value-cards
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, ExportSettings};
pub use ports::{
    access_gate::{AccessDecision, AccessGate, AlwaysAllow},
    document_renderer::{DocumentRenderer, RenderError},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::enhance_statements::{EnhanceError, EnhanceStatementsUseCase};
pub use use_cases::export_document::{ExportArtifact, ExportDocumentUseCase, ExportError};
pub use use_cases::select_values::{assign_supports, choose_tier_one, toggle_value};
