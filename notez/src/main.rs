//! Notez — an interactive string-instrument fretboard explorer

mod app;
mod fretboard;
mod music;

use app::NotezApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );
    log::info!("starting notez");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 640.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("notez"),
        ..Default::default()
    };

    eframe::run_native(
        "notez",
        options,
        Box::new(|cc| {
            notezcore::NotezTheme::default().apply(&cc.egui_ctx);
            Box::new(NotezApp::new(cc))
        }),
    )
}
