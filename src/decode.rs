use std::path::Path;

use image::ImageReader;

use crate::{error::GrayError, image::Image, wg_err, wg_try};

/// Guesses the format based on file contents, since uploads often carry the wrong extension.
pub fn decode(file: &Path) -> Result<Image, GrayError> {
    let reader = ImageReader::open(file)
        .map_err(|error| wg_err!("unable to open image '{}': {error}", file.display()))?;
    let reader = wg_try!(reader.with_guessed_format());
    let pixels = wg_try!(reader.decode()).into_rgba8();
    Ok(Image {
        path: file.to_owned(),
        pixels,
    })
}
