//! Shared test utilities for the photo-intake test suite.
//!
//! Real JPEG fixtures are encoded on the fly through the `image` crate, so
//! tests exercise the actual decode/encode paths without binary files in
//! the repository.

use image::ImageEncoder;
use std::path::Path;

/// Encode a small valid JPEG with the given dimensions at `path`.
///
/// The pixel pattern is a gradient so resizes have something to chew on.
pub fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}
