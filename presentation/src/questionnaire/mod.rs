//! Interactive questionnaire

mod command;
mod repl;
mod unlock;

pub use command::ReplCommand;
pub use repl::{Flow, QuestionnaireRepl};
pub use unlock::prompt_unlock;
