//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod access_gate;
pub mod document_renderer;
pub mod llm_gateway;
pub mod progress;
