use crate::layout::fit_to_page;
use crate::options::ConvertOptions;
use crate::types::{ConvertError, LoadedImage, Result};
use printpdf::*;
use std::path::Path;

pub async fn convert_to_pdf(
    images: &[LoadedImage],
    options: &ConvertOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let images = images.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let bytes =
        tokio::task::spawn_blocking(move || convert_to_pdf_bytes(&images, &options)).await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

/// Assemble the document in memory: one page per image, in input order.
pub fn convert_to_pdf_bytes(images: &[LoadedImage], options: &ConvertOptions) -> Result<Vec<u8>> {
    if images.is_empty() {
        return Err(ConvertError::NoImages);
    }

    let mut doc = PdfDocument::new("Image to PDF");
    let mut warnings = Vec::new();

    for image in images {
        let raw = RawImage::decode_from_bytes(&image.bytes, &mut warnings)
            .map_err(|e| ConvertError::Pdf(format!("{}: {e}", image.name)))?;
        let image_id = doc.add_image(&raw);

        let rect = fit_to_page(
            options.page_width_mm,
            options.page_height_mm,
            image.width as f32,
            image.height as f32,
        );

        // Placement rectangle is in mm; the transform wants points. With
        // the dpi pinned to 72 one source pixel maps to one point, so the
        // scale factors are just target size over pixel size.
        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Mm(rect.x).into_pt()),
                translate_y: Some(Mm(rect.y).into_pt()),
                scale_x: Some(Mm(rect.width).into_pt().0 / image.width as f32),
                scale_y: Some(Mm(rect.height).into_pt().0 / image.height as f32),
                dpi: Some(72.0),
                ..Default::default()
            },
        }];

        doc.pages.push(PdfPage::new(
            Mm(options.page_width_mm),
            Mm(options.page_height_mm),
            ops,
        ));
    }

    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}
