#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use glyphcast_image as image;

#[doc(inline)]
pub use glyphcast_render as render;

#[doc(inline)]
pub use glyphcast_io as io;
