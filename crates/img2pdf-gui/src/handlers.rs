use img2pdf::{ConvertOptions, LoadedImage};
use img2pdf_async_runtime::ConvertUpdate;
use std::path::PathBuf;
use tokio::sync::mpsc;

const THUMBNAIL_MAX_DIM: u32 = 256;

pub async fn handle_load_images(
    paths: Vec<PathBuf>,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    let _ = update_tx.send(ConvertUpdate::Progress {
        operation: "Loading images".to_string(),
        current: 0,
        total: paths.len(),
    });

    match img2pdf::load_images(&paths).await {
        Ok(images) => {
            let _ = update_tx.send(ConvertUpdate::ImagesLoaded { images });
        }
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Failed to load images: {e}"),
            });
        }
    }
}

pub async fn handle_build_thumbnails(
    images: Vec<LoadedImage>,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    for (index, image) in images.into_iter().enumerate() {
        let name = image.name.clone();
        let result =
            tokio::task::spawn_blocking(move || img2pdf::thumbnail_rgba(&image, THUMBNAIL_MAX_DIM))
                .await;

        match result {
            Ok(Ok((rgba_data, width, height))) => {
                let _ = update_tx.send(ConvertUpdate::ThumbnailReady {
                    index,
                    width: width as usize,
                    height: height as usize,
                    rgba_data,
                });
            }
            Ok(Err(e)) => log::warn!("Thumbnail for {name} failed: {e}"),
            Err(e) => log::warn!("Thumbnail task for {name} failed: {e}"),
        }
    }
}

pub async fn handle_generate(
    images: Vec<LoadedImage>,
    options: ConvertOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    let page_count = images.len();
    let _ = update_tx.send(ConvertUpdate::Progress {
        operation: "Generating PDF".to_string(),
        current: 0,
        total: page_count,
    });

    match img2pdf::convert_to_pdf(&images, &options, &output_path).await {
        Ok(()) => {
            log::info!("PDF generated");
            let _ = update_tx.send(ConvertUpdate::Complete {
                path: output_path,
                page_count,
            });
        }
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Failed to generate PDF: {e}"),
            });
        }
    }
}
