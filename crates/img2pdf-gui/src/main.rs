#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod state;
mod worker;

fn main() -> anyhow::Result<()> {
    let app_logger = logger::AppLogger::new(200);
    app_logger.clone().init()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Image to PDF"),
        ..Default::default()
    };

    eframe::run_native(
        "Image to PDF",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::Img2PdfApp::new(cc, tokio_handle, app_logger)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
