use std::path::PathBuf;

use image::RgbaImage;

/// A decoded source image, reduced to 8-bit sRGB with alpha for previewing.
#[derive(Debug, Clone)]
pub struct Image {
    pub path: PathBuf,
    pub pixels: RgbaImage,
}

impl Image {
    /// One-line description shown next to the original, e.g. `photo.jpg | 640x480`
    pub fn info_line(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        format!("{} | {}x{}", name, self.pixels.width(), self.pixels.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_line() {
        let image = Image {
            path: PathBuf::from("/some/path/photo.jpg"),
            pixels: RgbaImage::new(640, 480),
        };
        assert_eq!(image.info_line(), "photo.jpg | 640x480");
    }
}
