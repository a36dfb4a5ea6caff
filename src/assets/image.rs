use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{MotionError, MotionResult};

/// Decoded bitmap, straight-alpha RGBA8.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub rgba8: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// 1x1 fully transparent image.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba8: Arc::new(vec![0; 4]),
        }
    }
}

/// Which source ended up providing a [`LoadedImage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageOrigin {
    /// The requested asset.
    Primary,
    /// The poster fallback.
    Poster,
    /// Neither source could be decoded.
    Placeholder,
}

/// Result of a load that never fails.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedImage {
    /// Decoded pixels.
    pub image: PreparedImage,
    /// Source actually used.
    pub origin: ImageOrigin,
}

/// Decode PNG/JPEG/WebP/... bytes.
pub fn decode_image(bytes: &[u8]) -> MotionResult<PreparedImage> {
    let dyn_img = ::image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PreparedImage {
        width,
        height,
        rgba8: Arc::new(rgba.into_raw()),
    })
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> MotionResult<PreparedImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        MotionError::asset(format!("failed to read image '{}': {e}", path.display()))
    })?;
    decode_image(&bytes)
}

/// Load `primary`, falling back to `poster` and finally to a transparent placeholder.
///
/// Failures are logged, never returned, so a broken asset cannot stop a composition.
pub fn load_image_or_fallback(primary: &Path, poster: Option<&Path>) -> LoadedImage {
    match load_image(primary) {
        Ok(image) => {
            return LoadedImage {
                image,
                origin: ImageOrigin::Primary,
            };
        }
        Err(err) => {
            tracing::warn!(path = %primary.display(), %err, "image failed to load; using fallback");
        }
    }
    if let Some(poster) = poster {
        match load_image(poster) {
            Ok(image) => {
                return LoadedImage {
                    image,
                    origin: ImageOrigin::Poster,
                };
            }
            Err(err) => {
                tracing::warn!(path = %poster.display(), %err, "poster failed to load");
            }
        }
    }
    LoadedImage {
        image: PreparedImage::placeholder(),
        origin: ImageOrigin::Placeholder,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/image.rs"]
mod tests;
