//! Interactive browsing of search results.
//!
//! `input` turns raw prompt answers into actions, `controller` owns the
//! page/row state machine, and `view` connects it to the console.

pub mod controller;
pub mod input;
pub mod view;

pub use controller::{BrowseSession, BrowseState, BrowseView, PROMPT, SessionOutcome, Step};
pub use input::{Action, Keyword, interpret, parse_keyword, target_page};
pub use view::ConsoleBrowseView;
