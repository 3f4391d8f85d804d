//! Viewer window: navigation bar on top, the current image in the center,
//! and one severity indicator panel per category on either side.

mod indicator;
mod legend;

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use camwatch_core::{FogLevel, ImageSet, Navigation, OcclusionLevel, PredictionSource};
use eframe::{App, Frame, egui};

use self::indicator::severity_bar;
use self::legend::{DARK_BG, FOG_PALETTE, OCCLUSION_PALETTE, color_legend};

const MAX_TEXTURES: usize = 16;
const SIDE_PANEL_WIDTH: f32 = 185.0;

pub struct ViewerApp {
    images: ImageSet,
    nav: Navigation,
    predictions: Box<dyn PredictionSource>,
    // Decoded-image cache (basic LRU), keyed by path
    textures: HashMap<PathBuf, egui::TextureHandle>,
    texture_keys: VecDeque<PathBuf>,
}

impl ViewerApp {
    pub fn new(images: ImageSet, predictions: impl PredictionSource + 'static) -> Self {
        let nav = Navigation::new(images.len());
        Self {
            images,
            nav,
            predictions: Box::new(predictions),
            textures: HashMap::new(),
            texture_keys: VecDeque::new(),
        }
    }

    fn get_or_load_texture(
        &mut self,
        ctx: &egui::Context,
        path: &Path,
    ) -> Option<(egui::TextureId, egui::Vec2)> {
        if let Some(tex) = self.textures.get(path) {
            return Some((tex.id(), tex.size_vec2()));
        }

        match image::open(path) {
            Ok(img) => {
                let size = [img.width() as usize, img.height() as usize];
                let pixels = img.to_rgba8().into_raw();
                let color = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
                let name = format!("image:{}", path.display());
                let tex = ctx.load_texture(name, color, egui::TextureOptions::LINEAR);
                self.textures.insert(path.to_path_buf(), tex);
                self.texture_keys.push_back(path.to_path_buf());
                if self.textures.len() > MAX_TEXTURES
                    && let Some(old) = self.texture_keys.pop_front()
                {
                    self.textures.remove(&old);
                }
                self.textures
                    .get(path)
                    .map(|t| (t.id(), t.size_vec2()))
            }
            Err(e) => {
                tracing::warn!("failed to load {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Arrow keys trigger the same two actions as the buttons.
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.nav.previous();
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.nav.next();
            }
        });

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Previous").clicked() {
                    self.nav.previous();
                }
                if ui.button("Next").clicked() {
                    self.nav.next();
                }
                let name = self.images.file_name(self.nav.index());
                ui.label(format!(
                    "{name} ({} / {})",
                    self.nav.index() + 1,
                    self.nav.len()
                ));
            });
        });

        let index = self.nav.index();
        let path = self.images.path(index).to_path_buf();
        let prediction = self.predictions.lookup(self.images.file_name(index));

        let panel_frame = egui::Frame::new().fill(DARK_BG).inner_margin(8.0);

        egui::SidePanel::left("occlusion_panel")
            .resizable(false)
            .exact_width(SIDE_PANEL_WIDTH)
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.heading("Visual Coverage");
                ui.add_space(6.0);
                match prediction {
                    Some(p) => {
                        let labels = OcclusionLevel::ALL.map(|l| l.label());
                        color_legend(ui, labels, OCCLUSION_PALETTE);
                        ui.add_space(10.0);
                        severity_bar(
                            ui,
                            "occlusion_bar",
                            p.occlusion.rank(),
                            labels,
                            OCCLUSION_PALETTE,
                        );
                    }
                    None => {
                        ui.label("Prediction unavailable.");
                    }
                }
            });

        egui::SidePanel::right("fog_panel")
            .resizable(false)
            .exact_width(SIDE_PANEL_WIDTH)
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.heading("Fog Density");
                ui.add_space(6.0);
                match prediction {
                    Some(p) => match p.fog {
                        Some(fog) => {
                            let labels = FogLevel::ALL.map(|l| l.label());
                            color_legend(ui, labels, FOG_PALETTE);
                            ui.add_space(10.0);
                            severity_bar(ui, "fog_bar", fog.rank(), labels, FOG_PALETTE);
                        }
                        None => {
                            ui.label("Fog density unavailable.");
                        }
                    },
                    None => {
                        ui.label("Prediction unavailable.");
                    }
                }
            });

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                let avail = ui.available_size();
                if let Some((id, size)) = self.get_or_load_texture(ctx, &path) {
                    let scale = (avail.x / size.x).min(avail.y / size.y).min(1.0);
                    ui.centered_and_justified(|ui| {
                        ui.image((id, size * scale));
                    });
                } else {
                    let (resp, painter) = ui.allocate_painter(avail, egui::Sense::hover());
                    let r = resp.rect;
                    painter.rect_filled(r, 4.0, egui::Color32::from_gray(40));
                    painter.rect_stroke(
                        r,
                        4.0,
                        egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                        egui::StrokeKind::Inside,
                    );
                }
            });
    }
}
