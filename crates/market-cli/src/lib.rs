// NOTE: market Architecture Rationale
//
// Why a state machine behind traits (not print-as-you-fetch)?
// - The browse loop is the only part with real transitions (select, page, cancel)
// - Prompting, rendering and HTTP sit behind Prompter / BrowseView / MarketClient
// - The controller can be driven by scripted input in unit tests, no console needed
//
// Why one request at a time?
// - Interactive command: the user waits for each page anyway
// - A failed request ends the session instead of leaving stale rows on screen

mod args;
pub mod browse;
mod commands;
mod handlers;
pub mod presentation;
pub mod ui;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::{init_logging, run};
