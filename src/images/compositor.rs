//! Alpha compositing onto an opaque canvas.
//!
//! Terminal cells have no notion of transparency, so every pixel is blended
//! against a solid background before it is turned into glyph colors.
use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// Canvas color behind transparent pixels.
pub const DEFAULT_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Blend one pixel: `fg * alpha + background * (1 - alpha)`, truncated.
pub fn blend_pixel(pixel: Rgba<u8>, background: Rgb<u8>) -> Rgb<u8> {
    let [r, g, b, a] = pixel.0;
    if a == u8::MAX {
        return Rgb([r, g, b]);
    }

    let alpha = a as f32 / 255.0;
    let mix = |fg: u8, bg: u8| -> u8 {
        (fg as f32 * alpha + bg as f32 * (1.0 - alpha)).clamp(0.0, 255.0) as u8
    };
    Rgb([
        mix(r, background[0]),
        mix(g, background[1]),
        mix(b, background[2]),
    ])
}

/// Flatten an RGBA grid onto `background`. Output has the same dimensions.
pub fn composite(image: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut canvas = RgbImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels() {
        canvas.put_pixel(x, y, blend_pixel(*pixel, background));
    }
    canvas
}
