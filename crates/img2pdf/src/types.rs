use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No images to convert!")]
    NoImages,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {name}: {source}")]
    Decode {
        name: String,
        source: image::ImageError,
    },
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// One user-selected image, decoded far enough for layout math.
///
/// Holds the original encoded bytes (the PDF embeds those directly) plus
/// the pixel dimensions read from the image header.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Display name, taken from the source file name.
    pub name: String,
    /// Encoded file contents as selected by the user.
    pub bytes: Vec<u8>,
    /// Native pixel width.
    pub width: u32,
    /// Native pixel height.
    pub height: u32,
}
