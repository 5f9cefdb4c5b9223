use img2pdf_async_runtime::{ConvertCommand, ConvertUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes conversion commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ConvertCommand>,
    update_tx: mpsc::UnboundedSender<ConvertUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut command_rx, &update_tx).await;
    }
}

async fn process_command(
    cmd: ConvertCommand,
    command_rx: &mut mpsc::UnboundedReceiver<ConvertCommand>,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    match cmd {
        ConvertCommand::LoadImages { mut paths } => {
            // Drain queued selections, keeping only the most recent
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let ConvertCommand::LoadImages { paths: newer } = next_cmd {
                    log::debug!("Discarding queued selection, using newer one");
                    paths = newer;
                } else {
                    // Non-selection command found, need to process it next
                    // Since we can't put it back, process it now
                    Box::pin(process_command(next_cmd, command_rx, update_tx)).await;
                }
            }

            handlers::handle_load_images(paths, update_tx).await;
        }
        ConvertCommand::BuildThumbnails { images } => {
            handlers::handle_build_thumbnails(images, update_tx).await;
        }
        ConvertCommand::Generate {
            images,
            options,
            output_path,
        } => {
            handlers::handle_generate(images, options, output_path, update_tx).await;
        }
    }
}
