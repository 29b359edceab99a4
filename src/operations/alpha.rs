use image::RgbaImage;

/// Makes every pixel fully opaque, as the output will be written without an alpha channel.
pub fn drop_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        pixel.0[3] = u8::MAX;
    }
}
