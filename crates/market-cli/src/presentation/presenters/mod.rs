pub mod guidance;
pub mod listing;

pub use guidance::present_guidance;
pub use listing::{present_browse_all, present_detail, present_empty, present_page};
