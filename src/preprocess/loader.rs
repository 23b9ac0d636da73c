use crate::error::{DetectorError, Result};
use image::DynamicImage;
use std::path::Path;

/// Decoded source image in whatever pixel layout the decoder produced
pub type PixelBuffer = DynamicImage;

/// Decode an image file into a pixel buffer
///
/// Either the whole file decodes or an `ImageLoad` error is returned;
/// a missing path surfaces as the decoder's I/O error.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("load_image").entered();

    let buffer = image::open(path).map_err(|source| {
        tracing::error!("Failed to load image {}: {}", path.display(), source);
        DetectorError::ImageLoad {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        buffer.width(),
        buffer.height(),
        buffer.color()
    );

    Ok(buffer)
}
