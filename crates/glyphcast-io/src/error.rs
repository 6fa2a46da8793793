/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error when the pixmap header is malformed.
    #[error("Failed to parse the pixmap header. {0}")]
    InvalidPnmHeader(String),

    /// Error when the sample depth is not 8-bit.
    #[error("Unsupported max sample value ({0}), only 8-bit samples are supported")]
    UnsupportedBitDepth(u32),

    /// Error when the sample data ends before the geometry is covered.
    #[error("Image data ended early, expected {0} samples but found {1}")]
    TruncatedImageData(usize, usize),

    /// Error when an ascii sample cannot be parsed.
    #[error("Failed to parse the ascii sample data. {0}")]
    InvalidSampleData(String),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] glyphcast_image::ImageError),
}
