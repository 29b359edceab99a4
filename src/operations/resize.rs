use image::{imageops::FilterType, RgbaImage};

/// Resizes to exactly `dst_width` x `dst_height`, ignoring the aspect ratio.
/// The aspect-ratio lock is applied earlier, when the dimensions are chosen.
pub fn resize(image: &mut RgbaImage, dst_width: u32, dst_height: u32) {
    if image.width() == dst_width && image.height() == dst_height {
        return;
    }
    // zero-sized images cannot be encoded
    let dst_width = dst_width.max(1);
    let dst_height = dst_height.max(1);
    *image = image::imageops::resize(&*image, dst_width, dst_height, FilterType::Lanczos3);
}
