//! Prompt templates for the enhancement request

mod template;

pub use template::PromptTemplate;
