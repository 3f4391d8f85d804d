//! Single-bar severity indicator built on `egui_plot`.

use eframe::egui;
use egui_plot::{AxisHints, Bar, BarChart, Plot};

/// Bar geometry for a rank: height equals the 1-based rank, the fill comes
/// from the category palette. Pure, so the chart drawn for a given rank is
/// identical across frames.
fn bar_geometry(rank: usize, palette: [egui::Color32; 3]) -> (f64, egui::Color32) {
    (rank as f64, palette[rank - 1])
}

/// Label for a y-axis mark: the category names sit at 1, 2, 3; every other
/// mark is left blank.
fn tick_label(value: f64, labels: [&'static str; 3]) -> String {
    let idx = value.round() as i64;
    if (value - idx as f64).abs() < 1e-6 && (1..=3).contains(&idx) {
        labels[(idx - 1) as usize].to_string()
    } else {
        String::new()
    }
}

/// Draws one vertical bar at `rank` on a fixed 0..=3 scale. The scale is
/// the category count, not the data range, so all three positions stay
/// visually comparable across images. No x-axis, no title, no grid;
/// interaction disabled.
pub fn severity_bar(
    ui: &mut egui::Ui,
    id: &str,
    rank: usize,
    labels: [&'static str; 3],
    palette: [egui::Color32; 3],
) {
    let (height, fill) = bar_geometry(rank, palette);
    let bar = Bar::new(0.0, height).width(0.5).fill(fill);
    let y_axis =
        AxisHints::new_y().formatter(move |mark, _range| tick_label(mark.value, labels));

    Plot::new(id.to_owned())
        .height(240.0)
        .include_x(-0.8)
        .include_x(0.8)
        .include_y(0.0)
        .include_y(3.0)
        .custom_y_axes(vec![y_axis])
        .show_axes([false, true])
        .show_grid(false)
        .show_background(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("severity", vec![bar]));
        });
}
