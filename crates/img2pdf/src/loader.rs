use image::GenericImageView;
use std::path::{Path, PathBuf};

use crate::types::{ConvertError, LoadedImage, Result};

/// Load and decode a single image file.
///
/// The file is read async; decoding the header for pixel dimensions is
/// CPU-bound and runs on the blocking pool.
pub async fn load_image(path: impl AsRef<Path>) -> Result<LoadedImage> {
    let path = path.as_ref().to_owned();

    let bytes = tokio::fs::read(&path).await.map_err(|source| ConvertError::Read {
        path: path.clone(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tokio::task::spawn_blocking(move || decode_image(name, bytes)).await?
}

/// Load all selected images concurrently, preserving selection order.
///
/// One task is spawned per path; the handles are joined positionally, so
/// the result order matches the input order no matter which decode
/// finishes first. The first failure aborts the whole load: an image that
/// cannot be read or decoded surfaces an error naming the file instead of
/// producing a document with pages missing.
pub async fn load_images(paths: &[PathBuf]) -> Result<Vec<LoadedImage>> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move { load_image(path).await }))
        .collect();

    let mut images = Vec::with_capacity(handles.len());
    for handle in handles {
        images.push(handle.await??);
    }

    Ok(images)
}

fn decode_image(name: String, bytes: Vec<u8>) -> Result<LoadedImage> {
    let (width, height) = image::load_from_memory(&bytes)
        .map(|img| img.dimensions())
        .map_err(|source| ConvertError::Decode {
            name: name.clone(),
            source,
        })?;

    Ok(LoadedImage {
        name,
        bytes,
        width,
        height,
    })
}

/// Decode a preview thumbnail as RGBA pixels, bounded to `max_dim` on the
/// longer side. Returns the pixel buffer plus its dimensions.
pub fn thumbnail_rgba(image: &LoadedImage, max_dim: u32) -> Result<(Vec<u8>, u32, u32)> {
    let decoded =
        image::load_from_memory(&image.bytes).map_err(|source| ConvertError::Decode {
            name: image.name.clone(),
            source,
        })?;

    let thumb = decoded.thumbnail(max_dim, max_dim).to_rgba8();
    let (width, height) = thumb.dimensions();
    Ok((thumb.into_raw(), width, height))
}
