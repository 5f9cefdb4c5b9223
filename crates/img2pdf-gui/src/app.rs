use eframe::egui;
use img2pdf_async_runtime::{ConvertCommand, ConvertUpdate};
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::state::SessionState;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];
const PREVIEW_COLUMNS: usize = 5;

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct Img2PdfApp {
    session: SessionState,
    status: String,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<ConvertCommand>,
    update_rx: mpsc::UnboundedReceiver<ConvertUpdate>,

    // Progress tracking
    progress: Option<ProgressState>,

    logger: AppLogger,

    _tokio_handle: tokio::runtime::Handle,
}

impl Img2PdfApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            session: SessionState::default(),
            status: String::new(),
            command_tx,
            update_rx,
            progress: None,
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    fn select_images(&mut self, paths: Vec<PathBuf>) {
        let _ = self.command_tx.send(ConvertCommand::LoadImages { paths });
        self.status = "Loading images...".to_string();
    }

    fn convert_clicked(&mut self) {
        if !self.session.has_images() {
            // Same blocking alert as a browser `alert()`
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("Image to PDF")
                .set_description("No images to convert!")
                .show();
            return;
        }

        let suggested = img2pdf::output_file_name(&self.session.file_name);
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(&suggested)
            .save_file()
        {
            let _ = self.command_tx.send(ConvertCommand::Generate {
                images: self.session.images().to_vec(),
                options: img2pdf::ConvertOptions::default(),
                output_path: path,
            });
            self.status = "Converting...".to_string();
        }
    }

    fn is_image_file(path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
    }
}

impl eframe::App for Img2PdfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle drag-and-drop of image files
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                let paths: Vec<PathBuf> = i
                    .raw
                    .dropped_files
                    .iter()
                    .filter_map(|file| file.path.clone())
                    .filter(|path| Self::is_image_file(path))
                    .collect();
                let _ = self.command_tx.send(ConvertCommand::LoadImages { paths });
                self.status = "Loading images...".to_string();
            }
        });

        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                ConvertUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    self.progress = Some(ProgressState {
                        operation,
                        current,
                        total,
                    });
                    ctx.request_repaint(); // Request another frame
                }
                ConvertUpdate::ImagesLoaded { images } => {
                    self.status = format!("Loaded {} images", images.len());
                    self.progress = None;
                    let _ = self.command_tx.send(ConvertCommand::BuildThumbnails {
                        images: images.clone(),
                    });
                    self.session.replace_images(images);
                }
                ConvertUpdate::ThumbnailReady {
                    index,
                    width,
                    height,
                    rgba_data,
                } => {
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba_data);
                    let texture = ctx.load_texture(
                        format!("thumb_{index}"),
                        color_image,
                        egui::TextureOptions::default(),
                    );
                    self.session.set_thumbnail(index, texture);
                    ctx.request_repaint();
                }
                ConvertUpdate::Complete { path, page_count } => {
                    self.status = format!("Converted {page_count} images → {}", path.display());
                    self.progress = None;
                }
                ConvertUpdate::Error { message } => {
                    self.status = format!("Error: {message}");
                    self.progress = None;
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Image to PDF");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("🖼 Upload Images...").clicked() {
                    if let Some(paths) = rfd::FileDialog::new()
                        .add_filter("Images", IMAGE_EXTENSIONS)
                        .pick_files()
                    {
                        self.select_images(paths);
                    }
                }
                ui.label("or drop image files anywhere in this window");
            });

            if self.session.images_added() {
                ui.add_space(10.0);
                ui.separator();

                egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                    egui::Grid::new("preview_grid").spacing([8.0, 8.0]).show(ui, |ui| {
                        for (index, image) in self.session.images().iter().enumerate() {
                            if let Some(thumb) = self.session.thumbnail(index) {
                                ui.add(
                                    egui::Image::new(thumb)
                                        .fit_to_exact_size(egui::vec2(120.0, 120.0)),
                                )
                                .on_hover_text(&image.name);
                            } else {
                                ui.label("…").on_hover_text(&image.name);
                            }
                            if (index + 1) % PREVIEW_COLUMNS == 0 {
                                ui.end_row();
                            }
                        }
                    });
                });

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label("File name:");
                    ui.text_edit_singleline(&mut self.session.file_name);
                });

                ui.add_space(5.0);
                if ui.button("📄 Convert To PDF").clicked() {
                    self.convert_clicked();
                }
            }

            // Show progress bar
            if let Some(ref progress) = self.progress {
                ui.separator();
                ui.label(&progress.operation);
                ui.add(
                    egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                        .show_percentage(),
                );
                ctx.request_repaint(); // Keep updating during operations
            }

            if !self.status.is_empty() {
                ui.separator();
                ui.label(&self.status);
            }

            egui::CollapsingHeader::new("Log").show(ui, |ui| {
                if ui.button("Clear").clicked() {
                    self.logger.clear();
                }
                for entry in self.logger.get_entries() {
                    ui.monospace(format!(
                        "{} [{}] {}",
                        entry.timestamp.format("%H:%M:%S"),
                        entry.level,
                        entry.message
                    ));
                }
            });
        });
    }
}
