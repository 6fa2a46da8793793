/// An error type for the render module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RenderError {
    /// Error when the density palette contains no glyphs.
    #[error("Density palette must contain at least one glyph")]
    EmptyPalette,

    /// Error when the pixel stride is too small to hold an RGB triple.
    #[error("Pixel stride ({0}) must be at least 3")]
    InvalidStride(usize),

    /// Error when the pixel buffer does not cover the image geometry.
    #[error("Pixel buffer length ({0}) does not cover the image geometry ({1})")]
    InvalidPixelBufferSize(usize, usize),

    /// Error when the output buffer cannot hold one glyph per pixel.
    #[error("Output capacity ({0}) is smaller than the number of output cells ({1})")]
    InsufficientCapacity(usize, usize),

    /// Error when source and destination sizes do not match.
    #[error("Source size ({0}x{1}) does not match destination size ({2}x{3})")]
    InvalidCanvasSize(usize, usize, usize, usize),
}
