use std::path::PathBuf;

// Re-export types from the library crate
pub use img2pdf::{ConvertOptions, LoadedImage};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum ConvertCommand {
    /// Load a fresh image selection; replaces whatever was loaded before.
    LoadImages {
        paths: Vec<PathBuf>,
    },
    /// Build preview thumbnails for the loaded images.
    BuildThumbnails {
        images: Vec<LoadedImage>,
    },
    Generate {
        images: Vec<LoadedImage>,
        options: ConvertOptions,
        output_path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum ConvertUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    ImagesLoaded {
        images: Vec<LoadedImage>,
    },
    ThumbnailReady {
        index: usize,
        width: usize,
        height: usize,
        rgba_data: Vec<u8>,
    },
    Complete {
        path: PathBuf,
        page_count: usize,
    },
    Error {
        message: String,
    },
}
