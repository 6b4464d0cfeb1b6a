use crate::classifier_app::core::Event;
use crate::config::Config;
use crate::file_intake::encoding::decode_data_url;
use crate::file_intake::interface::{ImageSubmission, SelectedFile};
use crate::library::logger::interface::Logger;
use crate::render_projector::RenderModel;
use crate::view::interface::{Severity, View};
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

struct Preview {
    file_name: String,
    media_type: String,
    byte_len: usize,
    image: Option<egui::ColorImage>,
    generation: u64,
}

/// What the window paints. Written by the classifier loop, read every frame.
#[derive(Default)]
pub struct ViewBuffer {
    status: String,
    severity: Severity,
    roster: Vec<String>,
    preview: Option<Preview>,
    classify_enabled: bool,
    results: RenderModel,
}

fn lock(buffer: &Mutex<ViewBuffer>) -> MutexGuard<'_, ViewBuffer> {
    match buffer.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub struct ViewGui {
    buffer: Arc<Mutex<ViewBuffer>>,
    logger: Arc<dyn Logger + Send + Sync>,
    shown_encoding: Option<String>,
    generation: u64,
}

impl ViewGui {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(ViewBuffer::default())),
            logger: logger.with_namespace("view"),
            shown_encoding: None,
            generation: 0,
        }
    }

    /// Shared with the window, which paints it.
    pub fn buffer(&self) -> Arc<Mutex<ViewBuffer>> {
        self.buffer.clone()
    }

    fn decode_preview(&self, submission: &ImageSubmission) -> Option<egui::ColorImage> {
        let decoded = decode_data_url(&submission.encoded)
            .map_err(|e| e.detail())
            .and_then(|(_, bytes)| image::load_from_memory(&bytes).map_err(|e| e.to_string()));

        match decoded {
            Ok(image) => {
                let rgba = image.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
            }
            Err(reason) => {
                let _ = self.logger.warn(&format!(
                    "no preview for {}: {}",
                    submission.file_name, reason
                ));
                None
            }
        }
    }
}

impl View for ViewGui {
    fn set_status(
        &mut self,
        text: &str,
        severity: Severity,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut buffer = lock(&self.buffer);
        buffer.status = text.to_string();
        buffer.severity = severity;
        Ok(())
    }

    fn show_roster(&mut self, names: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        lock(&self.buffer).roster = names.to_vec();
        Ok(())
    }

    fn show_submission(
        &mut self,
        submission: Option<&ImageSubmission>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let encoding = submission.map(|s| s.encoded.as_str());
        if encoding == self.shown_encoding.as_deref() {
            return Ok(());
        }

        let preview = match submission {
            Some(submission) => {
                self.generation += 1;
                Some(Preview {
                    file_name: submission.file_name.clone(),
                    media_type: submission.media_type.clone(),
                    byte_len: submission.bytes.len(),
                    image: self.decode_preview(submission),
                    generation: self.generation,
                })
            }
            None => None,
        };

        self.shown_encoding = encoding.map(|e| e.to_string());
        lock(&self.buffer).preview = preview;
        Ok(())
    }

    fn set_classify_enabled(&mut self, enabled: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        lock(&self.buffer).classify_enabled = enabled;
        Ok(())
    }

    fn clear_results(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        lock(&self.buffer).results = RenderModel::default();
        Ok(())
    }

    fn paint_results(&mut self, model: &RenderModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        lock(&self.buffer).results = model.clone();
        Ok(())
    }
}

pub struct ClassifierWindow {
    buffer: Arc<Mutex<ViewBuffer>>,
    events: Sender<Event>,
    image_extensions: Vec<String>,
    texture: Option<(u64, egui::TextureHandle)>,
    is_drop_target: bool,
}

impl ClassifierWindow {
    pub fn new(buffer: Arc<Mutex<ViewBuffer>>, config: &Config, events: Sender<Event>) -> Self {
        Self {
            buffer,
            events,
            image_extensions: config.image_extensions.clone(),
            texture: None,
            is_drop_target: false,
        }
    }

    fn send(&self, event: Event) {
        // The loop only goes away after the window has closed.
        let _ = self.events.send(event);
    }

    fn pick_file(&self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select an image")
            .add_filter("Images", self.image_extensions.as_slice())
            .pick_file();

        if let Some(path) = picked {
            self.send(Event::FilePicked(SelectedFile::from_path(path)));
        }
    }

    fn take_dropped_file(&mut self, ctx: &egui::Context) -> Option<SelectedFile> {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.first().cloned(),
            )
        });
        self.is_drop_target = hovering;

        let file = dropped?;
        match (file.path, file.bytes) {
            (Some(path), _) => Some(SelectedFile::from_path(path)),
            (None, Some(bytes)) => Some(SelectedFile::from_bytes(&file.name, bytes)),
            (None, None) => None,
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context, preview: Option<&Preview>) {
        let wanted = preview.and_then(|p| p.image.as_ref().map(|image| (p.generation, image)));
        match wanted {
            Some((generation, image)) => {
                if self.texture.as_ref().map(|(g, _)| *g) != Some(generation) {
                    let handle =
                        ctx.load_texture("preview", image.clone(), egui::TextureOptions::LINEAR);
                    self.texture = Some((generation, handle));
                }
            }
            None => self.texture = None,
        }
    }
}

fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Neutral => egui::Color32::GRAY,
        Severity::Ok => egui::Color32::from_rgb(60, 170, 90),
        Severity::Error => egui::Color32::from_rgb(220, 70, 70),
    }
}

impl eframe::App for ClassifierWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(file) = self.take_dropped_file(ctx) {
            self.send(Event::FileDropped(file));
        }

        let buffer = self.buffer.clone();
        let buffer = lock(&buffer);
        self.sync_texture(ctx, buffer.preview.as_ref());

        let mut pick_clicked = false;
        let mut classify_clicked = false;

        egui::TopBottomPanel::top("roster").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Sports Person Classifier");
            ui.horizontal_wrapped(|ui| {
                for name in &buffer.roster {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.label(name);
                    });
                }
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let stroke_color = if self.is_drop_target {
                egui::Color32::LIGHT_BLUE
            } else {
                egui::Color32::DARK_GRAY
            };

            egui::Frame::group(ui.style())
                .stroke(egui::Stroke::new(2.0, stroke_color))
                .show(ui, |ui| {
                    ui.set_min_height(160.0);
                    ui.vertical_centered(|ui| {
                        match &buffer.preview {
                            Some(preview) => {
                                if let Some((_, texture)) = &self.texture {
                                    let sized = egui::load::SizedTexture::from_handle(texture);
                                    ui.add(egui::Image::new(sized).max_height(240.0));
                                }
                                ui.label(format!(
                                    "{} ({}, {} bytes)",
                                    preview.file_name, preview.media_type, preview.byte_len
                                ));
                            }
                            None => {
                                ui.add_space(40.0);
                                ui.label("Drop an image here");
                            }
                        }
                        if ui.button("Select Image").clicked() {
                            pick_clicked = true;
                        }
                    });
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(buffer.classify_enabled, egui::Button::new("Classify Image"))
                    .clicked()
                {
                    classify_clicked = true;
                }
                ui.colored_label(severity_color(buffer.severity), &buffer.status);
            });

            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                for card in &buffer.results.cards {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.strong(&card.title);
                        if card.placeholder_labels {
                            ui.small("Class names unavailable for this result");
                        }
                        for row in &card.rows {
                            ui.horizontal(|ui| {
                                ui.label(&row.label)
                                    .on_hover_text(row.probability.to_string());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| ui.label(&row.percentage),
                                );
                            });
                            ui.add(egui::ProgressBar::new((row.bar_fraction / 100.0) as f32));
                        }
                    });
                    ui.add_space(6.0);
                }
            });
        });

        drop(buffer);

        if pick_clicked {
            self.pick_file();
        }
        if classify_clicked {
            self.send(Event::ClassifyClicked);
        }

        // Buffer is written from the classifier loop; poll for its changes.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub fn run_window(
    config: &Config,
    window: ClassifierWindow,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Sports Person Classifier",
        options,
        Box::new(|_cc| Box::new(window)),
    )
    .map_err(|e| format!("window failed: {}", e).into())
}
