//! Terminal styling for the `flagenv` binary.

pub mod theme;

pub use theme::{should_use_colors, Theme};
