//! # Presentation Layer
//!
//! MVVM split of everything the CLI prints:
//!
//! ```text
//! [ Controller ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                       (Converter)       (Data)           (Driver)  ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/`: serializable raw data, no formatting.
//! * `presenters/`: pure functions from `market_types` to view models.
//! * `views/`: `fmt::Display` impls, layout and color.
//! * `formatters/`: wrap, table, time and color helpers used by views.
//! * `renderers/`: writes a view model to stdout or the pager, as text or JSON.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, DisplayOptions, OutputFormat};
