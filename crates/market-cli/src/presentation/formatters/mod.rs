pub mod style;
pub mod text;
pub mod time;

pub use style::{Tone, tint};
