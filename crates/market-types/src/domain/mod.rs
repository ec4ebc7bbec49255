pub mod listing;
pub mod page;

pub use listing::*;
pub use page::*;
