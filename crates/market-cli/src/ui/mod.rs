pub mod pager;
pub mod prompt;

pub use pager::Pager;
pub use prompt::{LinePrompter, Prompter, TerminalPrompter, stdin_prompter};
