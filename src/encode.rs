use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use image::{codecs::png::PngEncoder, ImageEncoder};

use crate::{error::GrayError, image::Image, wg_err, wg_try};

/// Where a preview is written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Location {
    Path(PathBuf),
    #[default]
    Stdio,
}

/// Writes the preview as a PNG. The actual output format is produced by the
/// conversion service; the preview only has to be displayable.
pub fn encode(image: &Image, location: &Location) -> Result<(), GrayError> {
    match location {
        Location::Path(path) => {
            // `File::create` automatically truncates (overwrites) the file if it exists.
            let file = File::create(path)
                .map_err(|error| wg_err!("unable to open image '{}': {error}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_png(image, &mut writer)?;
            // Dropping the writer would flush too, but without reporting errors.
            wg_try!(writer.flush());
        }
        Location::Stdio => {
            let mut stdout = std::io::stdout().lock();
            write_png(image, &mut stdout)?;
            wg_try!(stdout.flush());
        }
    }
    Ok(())
}

fn write_png<W: Write>(image: &Image, writer: &mut W) -> Result<(), GrayError> {
    let pixels = &image.pixels;
    let encoder = PngEncoder::new(writer);
    wg_try!(encoder.write_image(
        pixels.as_raw(),
        pixels.width(),
        pixels.height(),
        image::ExtendedColorType::Rgba8,
    ));
    Ok(())
}
