use glyphcast_image::{Image, ImageSize};

use crate::error::RenderError;
use crate::palette::DensityPalette;

/// Render a pixel buffer into a glyph buffer.
///
/// Each pixel's brightness is the truncated mean of its first three channel
/// bytes; any further channels within the stride (e.g. alpha) are skipped.
/// The brightness selects a glyph from the palette and the glyph is written
/// at `y * width + x`, mirroring the pixel buffer's row-major scan order
/// with stride 1.
///
/// All preconditions are checked before any write, so a rejected call
/// leaves `out` untouched.
///
/// # Arguments
///
/// * `pixels` - The pixel buffer, `width * height * stride` bytes in
///   row-major scan order.
/// * `size` - The image geometry in pixels.
/// * `stride` - The number of bytes per pixel, at least 3.
/// * `palette` - The glyph ramp to select output glyphs from.
/// * `out` - The output buffer, with capacity for at least
///   `width * height` glyphs.
///
/// # Returns
///
/// The number of glyphs written, `width * height`.
///
/// # Errors
///
/// Returns an error if the stride is smaller than 3, or if the pixel or
/// output buffer is too small for the given geometry.
///
/// # Examples
///
/// ```
/// use glyphcast_image::ImageSize;
/// use glyphcast_render::{render_into, DensityPalette};
///
/// let pixels = [0u8, 0, 0, 255, 255, 255];
/// let palette = DensityPalette::new(b"@. ", true).unwrap();
/// let mut out = [0u8; 2];
///
/// let written = render_into(
///     &pixels,
///     ImageSize { width: 2, height: 1 },
///     3,
///     &palette,
///     &mut out,
/// ).unwrap();
///
/// assert_eq!(written, 2);
/// assert_eq!(&out, b" @");
/// ```
pub fn render_into(
    pixels: &[u8],
    size: ImageSize,
    stride: usize,
    palette: &DensityPalette,
    out: &mut [u8],
) -> Result<usize, RenderError> {
    if stride < 3 {
        return Err(RenderError::InvalidStride(stride));
    }

    let cells = size.width * size.height;
    if out.len() < cells {
        return Err(RenderError::InsufficientCapacity(out.len(), cells));
    }
    if pixels.len() < cells * stride {
        return Err(RenderError::InvalidPixelBufferSize(
            pixels.len(),
            cells * stride,
        ));
    }

    if cells == 0 {
        return Ok(0);
    }

    pixels
        .chunks_exact(size.width * stride)
        .take(size.height)
        .zip(out.chunks_exact_mut(size.width))
        .for_each(|(src_row, dst_row)| {
            src_row
                .chunks_exact(stride)
                .zip(dst_row.iter_mut())
                .for_each(|(src_pixel, dst_cell)| {
                    // the sum of three channel bytes needs more than 8 bits
                    let sum =
                        src_pixel[0] as u16 + src_pixel[1] as u16 + src_pixel[2] as u16;
                    *dst_cell = palette.glyph_for((sum / 3) as u8);
                });
        });

    Ok(cells)
}

/// Render an image into a glyph canvas.
///
/// # Arguments
///
/// * `src` - The input image with at least 3 channels per pixel.
/// * `dst` - The output glyph canvas, one glyph per pixel.
/// * `palette` - The glyph ramp to select output glyphs from.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use glyphcast_image::{Image, ImageSize};
/// use glyphcast_render::{render, DensityPalette};
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![0, 0, 0, 255, 255, 255],
/// ).unwrap();
///
/// let palette = DensityPalette::new(b"@. ", true).unwrap();
/// let mut canvas = Image::<u8, 1>::from_size_val(image.size(), 0u8).unwrap();
///
/// render(&image, &mut canvas, &palette).unwrap();
/// assert_eq!(canvas.as_slice(), b" @");
/// ```
pub fn render<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, 1>,
    palette: &DensityPalette,
) -> Result<(), RenderError> {
    if src.size() != dst.size() {
        return Err(RenderError::InvalidCanvasSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    render_into(src.as_slice(), src.size(), C, palette, dst.as_slice_mut())?;

    Ok(())
}

/// Format a glyph canvas as text, one line per pixel row.
///
/// # Examples
///
/// ```
/// use glyphcast_image::{Image, ImageSize};
/// use glyphcast_render::to_text;
///
/// let canvas = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     b"@. :".to_vec(),
/// ).unwrap();
///
/// assert_eq!(to_text(&canvas), "@.\n :\n");
/// ```
pub fn to_text(canvas: &Image<u8, 1>) -> String {
    let width = canvas.width();
    if width == 0 || canvas.height() == 0 {
        return String::new();
    }

    let mut text = String::with_capacity((width + 1) * canvas.height());
    for row in canvas.as_slice().chunks_exact(width) {
        for glyph in row {
            text.push(*glyph as char);
        }
        text.push('\n');
    }

    text
}
