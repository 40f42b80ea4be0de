//! Language model adapters implementing the `LlmGateway` port.

mod openai;

pub use openai::OpenAiGateway;
