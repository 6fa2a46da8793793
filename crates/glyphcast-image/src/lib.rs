#![deny(missing_docs)]
//! Image container types for generating text art from raster images

/// image representation for pixel data in row-major scan order.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
