/// File stem used when the user leaves the output name blank.
pub const DEFAULT_FILE_STEM: &str = "image-to-pdf";

/// Derive the output file name from the user-entered text.
///
/// The input is trimmed; a blank result falls back to the default name,
/// anything else gets the `.pdf` extension appended.
pub fn output_file_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        format!("{DEFAULT_FILE_STEM}.pdf")
    } else {
        format!("{trimmed}.pdf")
    }
}
