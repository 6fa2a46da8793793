use argh::FromArgs;
use std::path::PathBuf;

use glyphcast::image::Image;
use glyphcast::io::{pnm, txt};
use glyphcast::render::{self, DensityPalette};

/// Default glyph ramp, dense to sparse.
const DEFAULT_RAMP: &str = "@#W$9876543210?!abc;:+=-,._      ";

#[derive(FromArgs)]
/// Render a portable pixmap image as text art
struct Args {
    /// path to an input image in PPM format
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// glyph ramp ordered from dense to sparse
    #[argh(option, short = 'p', default = "DEFAULT_RAMP.to_string()")]
    palette: String,

    /// map bright pixels to the start of the ramp (defaults to true)
    #[argh(option, short = 'r', default = "true")]
    reverse: bool,

    /// write the text art to a file instead of stdout
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if !args.palette.is_ascii() {
        return Err("the glyph ramp must contain single-byte (ascii) glyphs only".into());
    }

    // read the image
    let image: Image<u8, 3> = pnm::read_image_pnm_rgb8(&args.image_path)?;
    log::info!(
        "loaded {} ({} x {})",
        args.image_path.display(),
        image.size().width,
        image.size().height
    );

    // map each pixel to a glyph
    let palette = DensityPalette::new(args.palette.as_bytes(), args.reverse)?;
    let mut canvas = Image::<u8, 1>::from_size_val(image.size(), 0u8)?;
    render::render(&image, &mut canvas, &palette)?;

    match args.output {
        Some(path) => txt::write_text(&path, &canvas)?,
        None => print!("{}", render::to_text(&canvas)),
    }

    Ok(())
}
