//! Perceptual grayscale conversion of 8-bit sRGB pixels.

use image::RgbaImage;

use crate::arg_parsers::ConversionMode;

const REC709: [f64; 3] = [0.2126, 0.7152, 0.0722];
const REC601: [f64; 3] = [0.299, 0.587, 0.114];
const REC2100: [f64; 3] = [0.2627, 0.6780, 0.0593];

/// Replaces every pixel with its gray level under `mode`. Alpha is left intact.
pub fn grayscale(image: &mut RgbaImage, mode: ConversionMode) {
    grayscale_raw(image, mode);
}

/// Same as [`grayscale`], over interleaved RGBA bytes.
///
/// The caller guarantees the length is `width * height * 4`;
/// bytes of an incomplete trailing pixel are not touched.
pub fn grayscale_raw(rgba: &mut [u8], mode: ConversionMode) {
    for pixel in rgba.chunks_exact_mut(4) {
        let gray = gray_level([pixel[0], pixel[1], pixel[2]], mode);
        pixel[0] = gray;
        pixel[1] = gray;
        pixel[2] = gray;
    }
}

/// Gray level of a single sRGB color
pub fn gray_level(rgb: [u8; 3], mode: ConversionMode) -> u8 {
    let [r, g, b] = rgb.map(|c| f64::from(c) / 255.0);
    let gray = match mode {
        ConversionMode::Rec709 | ConversionMode::LStar => weighted(REC709, r, g, b),
        ConversionMode::Rec601 => weighted(REC601, r, g, b),
        ConversionMode::Rec2100 => weighted(REC2100, r, g, b),
        ConversionMode::HslLightness => 0.5 * (r.max(g).max(b) + r.min(g).min(b)),
        ConversionMode::HsvValue => r.max(g).max(b),
        ConversionMode::Gamma => linear_to_srgb(weighted(
            REC709,
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
        )),
    };
    // the gamma round-trip can overshoot slightly.
    // Ties go to even, like a browser canvas stores them.
    (gray * 255.0).clamp(0.0, 255.0).round_ties_even() as u8
}

#[inline]
fn weighted(weights: [f64; 3], r: f64, g: f64, b: f64) -> f64 {
    weights[0] * r + weights[1] * g + weights[2] * b
}

#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::Rgba;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use strum::VariantArray;

    impl Arbitrary for ConversionMode {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(ConversionMode::VARIANTS).unwrap()
        }
    }

    const RED: [u8; 3] = [255, 0, 0];

    fn assert_close(actual: u8, expected: u8) {
        assert!(
            actual.abs_diff(expected) <= 1,
            "expected {expected} (±1), got {actual}"
        );
    }

    #[test]
    fn test_pure_red() {
        assert_close(gray_level(RED, ConversionMode::Rec709), 54);
        assert_close(gray_level(RED, ConversionMode::LStar), 54);
        assert_close(gray_level(RED, ConversionMode::Rec601), 76);
        assert_close(gray_level(RED, ConversionMode::Rec2100), 67);
        assert_eq!(gray_level(RED, ConversionMode::HsvValue), 255);
        assert_close(gray_level(RED, ConversionMode::HslLightness), 128);
    }

    #[test]
    fn test_modes_are_distinguishable() {
        let color = [200, 30, 90];
        let rec709 = gray_level(color, ConversionMode::Rec709);
        let rec601 = gray_level(color, ConversionMode::Rec601);
        let gamma = gray_level(color, ConversionMode::Gamma);
        assert_ne!(rec709, rec601);
        assert_ne!(rec709, gamma);
        assert_ne!(rec601, gamma);
    }

    #[test]
    fn test_extremes() {
        for mode in ConversionMode::VARIANTS {
            assert_eq!(gray_level([0, 0, 0], *mode), 0, "{mode}");
            assert_eq!(gray_level([255, 255, 255], *mode), 255, "{mode}");
        }
    }

    #[test]
    fn test_ties_round_to_even() {
        // 4.5 and 5.5
        assert_eq!(gray_level([0, 0, 9], ConversionMode::HslLightness), 4);
        assert_eq!(gray_level([0, 0, 11], ConversionMode::HslLightness), 6);
        assert_eq!(gray_level([0, 1, 0], ConversionMode::HslLightness), 0);
    }

    #[test]
    fn test_image_buffer() {
        let mut image = RgbaImage::from_pixel(3, 2, Rgba([255, 0, 0, 17]));
        grayscale(&mut image, ConversionMode::HsvValue);
        assert!(image.pixels().all(|p| *p == Rgba([255, 255, 255, 17])));
    }

    #[test]
    fn test_raw_ignores_incomplete_pixel() {
        let mut raw = vec![255, 0, 0, 255, 9, 9];
        grayscale_raw(&mut raw, ConversionMode::Rec601);
        assert_eq!(&raw[4..], &[9, 9]);
        assert_eq!(raw[0], raw[1]);
        assert_eq!(raw[1], raw[2]);
    }

    #[quickcheck]
    fn output_is_gray_and_alpha_is_kept(rgba: (u8, u8, u8, u8), mode: ConversionMode) -> bool {
        let (r, g, b, a) = rgba;
        let mut raw = [r, g, b, a];
        grayscale_raw(&mut raw, mode);
        raw[0] == raw[1] && raw[1] == raw[2] && raw[3] == a
    }

    #[quickcheck]
    fn gamma_preserves_gray(level: u8) -> bool {
        gray_level([level, level, level], ConversionMode::Gamma).abs_diff(level) <= 1
    }

    #[quickcheck]
    fn hsl_lies_between_min_and_max(rgb: (u8, u8, u8)) -> bool {
        let (r, g, b) = rgb;
        let gray = gray_level([r, g, b], ConversionMode::HslLightness);
        gray >= r.min(g).min(b) && gray <= r.max(g).max(b)
    }
}
