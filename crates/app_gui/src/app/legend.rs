//! Category palettes, the dark theme fill, and the shared legend renderer.

use eframe::egui::{self, Color32};

/// Panel background, a near-black navy shared by every region.
pub const DARK_BG: Color32 = Color32::from_rgb(14, 17, 23);

/// Occlusion colors, indexed by rank - 1: green, yellow, red.
pub const OCCLUSION_PALETTE: [Color32; 3] = [
    Color32::from_rgb(0x06, 0xFF, 0x00),
    Color32::from_rgb(0xFF, 0xE4, 0x00),
    Color32::from_rgb(0xFF, 0x17, 0x00),
];

/// Fog colors, indexed by rank - 1: bright teal fading into deep blue.
pub const FOG_PALETTE: [Color32; 3] = [
    Color32::from_rgb(0x16, 0xF4, 0xD0),
    Color32::from_rgb(0x42, 0x9E, 0xA6),
    Color32::from_rgb(0x15, 0x3B, 0x50),
];

/// One legend row per label: a color swatch next to the name. Both
/// categories share this renderer; only the labels and palette differ.
pub fn color_legend(ui: &mut egui::Ui, labels: [&'static str; 3], palette: [Color32; 3]) {
    for (label, color) in labels.into_iter().zip(palette) {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
            ui.label(label);
        });
    }
}
