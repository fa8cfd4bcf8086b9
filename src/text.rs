/// Single-line horizontal layout.
pub mod layout;

pub use layout::{GlyphPosition, TextLine};
