#![deny(missing_docs)]
//! Glyph mapping operations to turn raster images into text art

/// density palette and brightness remapping module.
pub mod palette;

/// glyph rendering operations module.
pub mod render;

/// Error types for the render module.
pub mod error;

pub use crate::error::RenderError;
pub use crate::palette::{map_range, DensityPalette};
pub use crate::render::{render, render_into, to_text};
