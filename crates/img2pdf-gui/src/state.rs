use egui::TextureHandle;
use img2pdf::LoadedImage;

/// UI state for one user session: the held image selection, its preview
/// textures, and the output name field.
///
/// The image list is replaced wholesale on every new selection, never
/// appended to; thumbnails are reset along with it.
#[derive(Default)]
pub struct SessionState {
    images: Vec<LoadedImage>,
    thumbnails: Vec<Option<TextureHandle>>,
    images_added: bool,
    pub file_name: String,
}

impl SessionState {
    pub fn replace_images(&mut self, images: Vec<LoadedImage>) {
        self.thumbnails = vec![None; images.len()];
        self.images = images;
        self.images_added = true;
    }

    /// Whether a selection has been made at all. Gates the preview and
    /// convert controls; a selection may still hold zero images.
    pub fn images_added(&self) -> bool {
        self.images_added
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn images(&self) -> &[LoadedImage] {
        &self.images
    }

    pub fn set_thumbnail(&mut self, index: usize, texture: TextureHandle) {
        if let Some(slot) = self.thumbnails.get_mut(index) {
            *slot = Some(texture);
        }
    }

    pub fn thumbnail(&self, index: usize) -> Option<&TextureHandle> {
        self.thumbnails.get(index).and_then(|t| t.as_ref())
    }
}
