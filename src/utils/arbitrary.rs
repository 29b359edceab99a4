//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use image::{Rgba, RgbaImage};
use quickcheck::Arbitrary;

/// An image of 1 to 16 pixels per side with random contents
#[must_use]
pub fn small_image(gen: &mut quickcheck::Gen) -> RgbaImage {
    let width = u32::from(u8::arbitrary(gen) % 16) + 1;
    let height = u32::from(u8::arbitrary(gen) % 16) + 1;
    RgbaImage::from_fn(width, height, |_, _| {
        let (r, g, b, a) = <(u8, u8, u8, u8)>::arbitrary(gen);
        Rgba([r, g, b, a])
    })
}
