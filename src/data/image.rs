//! Image decoding for the folder loader.
//!
//! Images are decoded with the `image` crate (PNG/JPEG/BMP/GIF), resized to a
//! square and flattened as R, G, B, ... in row-major order. Pixel values stay
//! raw bytes; scaling happens in `preprocess`.

use std::path::Path;

use image::imageops::FilterType;

use crate::error::Result;

/// Decodes the image at `path`, resizes it to `size × size` and returns its
/// RGB bytes, `size * size * 3` of them.
pub fn load_rgb_pixels(path: &Path, size: u32) -> Result<Vec<u8>> {
    let img = image::open(path)?;
    Ok(rgb_pixels(&img, size))
}

/// Same as `load_rgb_pixels` for an in-memory encoded image.
#[cfg(test)]
fn rgb_pixels_from_bytes(bytes: &[u8], size: u32) -> Result<Vec<u8>> {
    let img = image::load_from_memory(bytes)?;
    Ok(rgb_pixels(&img, size))
}

fn rgb_pixels(img: &image::DynamicImage, size: u32) -> Vec<u8> {
    img.resize_exact(size, size, FilterType::Lanczos3)
        .to_rgb8()
        .into_raw()
}
