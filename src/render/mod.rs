//! Display collaborators: a text renderer over the core colour schemes.
//!
//! Nothing in this module mutates game state.

pub mod text;

pub use crate::core::{ColorScheme, TileColors};
pub use text::TextRenderer;
