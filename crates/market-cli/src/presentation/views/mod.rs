mod detail;
mod guidance;
mod listing;

pub use detail::ListingDetailView;
pub use listing::{EmptyResultsView, ListingPageView};
