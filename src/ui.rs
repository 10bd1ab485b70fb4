use std::path::{Path, PathBuf};

use eframe::egui;

const WINDOW_SIZE: [f32; 2] = [1200.0, 900.0];

struct ChartViewerApp {
    path: PathBuf,
    pending: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
    error: Option<String>,
}

impl ChartViewerApp {
    fn new(path: PathBuf) -> Self {
        let (pending, error) = match load_color_image(&path) {
            Ok(image) => (Some(image), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            path,
            pending,
            texture: None,
            error,
        }
    }
}

fn load_color_image(path: &Path) -> Result<egui::ColorImage, String> {
    let rgba = image::open(path)
        .map_err(|error| format!("failed to open chart {}: {error}", path.display()))?
        .to_rgba8();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [rgba.width() as usize, rgba.height() as usize],
        rgba.as_raw(),
    ))
}

impl eframe::App for ChartViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(image) = self.pending.take() {
            self.texture = Some(ctx.load_texture(
                "phasebench-chart",
                image,
                egui::TextureOptions::LINEAR,
            ));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(self.path.display().to_string());
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error);
                return;
            }
            if let Some(texture) = &self.texture {
                let available = ui.available_size();
                let size = texture.size_vec2();
                let scale = (available.x / size.x).min(available.y / size.y).min(1.0);
                ui.add(egui::Image::new(egui::load::SizedTexture::new(
                    texture.id(),
                    size * scale,
                )));
            }
        });
    }
}

/// Blocks until the chart window is closed.
pub fn run(chart: &Path) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("phasebench chart")
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(true),
        ..Default::default()
    };
    let path = chart.to_path_buf();

    eframe::run_native(
        "phasebench chart",
        options,
        Box::new(move |_cc| Ok(Box::new(ChartViewerApp::new(path)))),
    )
    .map_err(|error| error.to_string())
}
