use std::path::Path;

use glyphcast_image::Image;

use crate::error::IoError;

/// Writes a glyph canvas to the given file path as text.
///
/// The canvas is written row by row, with a line break after each row of
/// `width` glyphs.
///
/// # Arguments
///
/// * `file_path` - The path to write the text art to.
/// * `canvas` - The glyph canvas, one glyph per pixel.
pub fn write_text(file_path: impl AsRef<Path>, canvas: &Image<u8, 1>) -> Result<(), IoError> {
    let width = canvas.width();

    let mut data = Vec::with_capacity(canvas.as_slice().len() + canvas.height());
    if width > 0 {
        for row in canvas.as_slice().chunks_exact(width) {
            data.extend_from_slice(row);
            data.push(b'\n');
        }
    }

    std::fs::write(file_path, data)?;

    Ok(())
}
