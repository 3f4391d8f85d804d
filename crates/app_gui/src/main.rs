use anyhow::Context;
use camwatch_core::{ImageSet, PredictionTable, ViewerConfig, scan_image_folder};
use eframe::{NativeOptions, egui};

use crate::app::ViewerApp;

mod app;

const CONFIG_PATH: &str = "camwatch.toml";

fn main() {
    tracing_subscriber::fmt::init();
    let (images, table) = match startup() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Camwatch failed to start: {e:#}");
            std::process::exit(1);
        }
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1160.0, 760.0]),
        ..Default::default()
    };
    if let Err(e) = eframe::run_native(
        "Visual Coverage and Fog Density Level",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(ViewerApp::new(
                images, table,
            )))
        }),
    ) {
        eprintln!("Viewer exited with an error: {e}");
    }
}

fn startup() -> anyhow::Result<(ImageSet, PredictionTable)> {
    let config =
        ViewerConfig::load_or_default(CONFIG_PATH).with_context(|| format!("reading {CONFIG_PATH}"))?;
    let images = scan_image_folder(&config.image_dir)
        .with_context(|| format!("scanning {}", config.image_dir.display()))?;
    let table = match &config.predictions_csv {
        Some(path) => PredictionTable::from_csv_path(path)
            .with_context(|| format!("loading predictions from {}", path.display()))?,
        None => PredictionTable::builtin(),
    };
    tracing::info!(
        images = images.len(),
        predictions = table.len(),
        "catalog ready"
    );
    Ok((images, table))
}
