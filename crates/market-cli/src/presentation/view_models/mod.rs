pub mod common;
pub mod listing;
pub mod result;

use std::fmt;

pub use common::{DisplayOptions, Guidance, OutputFormat, StatusBadge};
pub use listing::{
    BrowseAllViewModel, EmptyResultsViewModel, GuidanceViewModel, ListingDetailViewModel,
    ListingPageViewModel, ListingRowViewModel, UsageExample,
};
pub use result::CommandResultViewModel;

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
