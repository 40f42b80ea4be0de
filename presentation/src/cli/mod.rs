mod answers;
pub mod commands;
