/// Page settings for the generated document.
///
/// The converter always produces one page per image at a single fixed page
/// size; the fields exist so the layout math stays parametric, not because
/// the binaries expose them.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
}

impl Default for ConvertOptions {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
        }
    }
}
