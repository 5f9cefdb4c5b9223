mod layout;
mod loader;
mod naming;
mod options;
mod pdf;
mod types;

pub use layout::{Rect, fit_to_page};
pub use loader::{load_image, load_images, thumbnail_rgba};
pub use naming::{DEFAULT_FILE_STEM, output_file_name};
pub use options::ConvertOptions;
pub use pdf::{convert_to_pdf, convert_to_pdf_bytes};
pub use types::{ConvertError, LoadedImage, Result};
