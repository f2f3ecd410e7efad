use fast_image_resize as fr;
use image::{ImageBuffer, RgbaImage, imageops};
use log::{debug, warn};
use std::num::NonZeroU32;

/// Compute dimensions that fit inside `max_width`x`max_height` while keeping
/// the aspect ratio. Images that already fit are never upscaled.
///
/// The binding side is picked by comparing aspect ratios with integer
/// cross-multiplication, so it lands exactly on the bound and only the other
/// side is floored.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    if max_width == 0 || max_height == 0 {
        return (0, 0);
    }

    let (w, h) = (width as u64, height as u64);
    let (max_w, max_h) = (max_width as u64, max_height as u64);

    if w * max_h >= h * max_w {
        let new_height = (h * max_w / w).max(1);
        (max_width, new_height as u32)
    } else {
        let new_width = (w * max_h / h).max(1);
        (new_width as u32, max_height)
    }
}

/// Scale `image` down to fit the bounding box. Returns a clone when no
/// scaling is needed.
pub fn scale_to_fit(image: &RgbaImage, max_width: u32, max_height: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = fit_dimensions(width, height, max_width, max_height);

    if (new_width, new_height) == (width, height) {
        return image.clone();
    }
    if new_width == 0 || new_height == 0 {
        return RgbaImage::new(new_width, new_height);
    }

    debug!("Resizing {width}x{height} to {new_width}x{new_height}");
    match fast_resize_image(image, new_width, new_height) {
        Ok(resized) => resized,
        Err(e) => {
            warn!("Fast resize failed: {e}, falling back to slow resize");
            slow_resize_image(image, new_width, new_height)
        }
    }
}

/// Lanczos3 resize using `image::imageops`, on premultiplied alpha.
fn slow_resize_image(src_image: &RgbaImage, new_width: u32, new_height: u32) -> RgbaImage {
    let mut premultiplied = src_image.clone();
    premultiply_alpha(&mut premultiplied);
    let mut resized = imageops::resize(
        &premultiplied,
        new_width,
        new_height,
        imageops::FilterType::Lanczos3,
    );
    unpremultiply_alpha(&mut resized);
    resized
}

fn premultiply_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let alpha = pixel[3] as u32;
        for channel in &mut pixel.0[..3] {
            *channel = ((*channel as u32 * alpha + 127) / 255) as u8;
        }
    }
}

fn unpremultiply_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let alpha = pixel[3] as u32;
        for channel in &mut pixel.0[..3] {
            *channel = if alpha == 0 {
                0
            } else {
                ((*channel as u32 * 255 + alpha / 2) / alpha).min(255) as u8
            };
        }
    }
}

/// Lanczos3 resize using fast_image_resize. Color channels are filtered
/// premultiplied by alpha so transparent pixels do not bleed into edges.
fn fast_resize_image(
    src_image: &RgbaImage,
    new_width: u32,
    new_height: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let (src_width, src_height) = src_image.dimensions();

    let mut src_view = fr::Image::from_vec_u8(
        NonZeroU32::new(src_width).ok_or("Invalid width")?,
        NonZeroU32::new(src_height).ok_or("Invalid height")?,
        src_image.as_raw().clone(),
        fr::PixelType::U8x4,
    )?;

    let dst_width = NonZeroU32::new(new_width).ok_or("Invalid target width")?;
    let dst_height = NonZeroU32::new(new_height).ok_or("Invalid target height")?;
    let mut dst_image = fr::Image::new(dst_width, dst_height, fr::PixelType::U8x4);

    let mul_div = fr::MulDiv::default();
    mul_div.multiply_alpha_inplace(&mut src_view.view_mut())?;

    let mut resizer = fr::Resizer::new(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));
    resizer.resize(&src_view.view(), &mut dst_image.view_mut())?;
    mul_div.divide_alpha_inplace(&mut dst_image.view_mut())?;

    let resized: RgbaImage = ImageBuffer::from_raw(new_width, new_height, dst_image.into_vec())
        .ok_or("Failed to create ImageBuffer")?;
    Ok(resized)
}
