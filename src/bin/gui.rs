// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use vacancy_stats::{config::{state::GuiState, AppOptions}, gui, log::{self, LogTarget}};

fn main() {
    if let Err(e) = log::init(LogTarget::File) {
        eprintln!("Logging disabled: {e}");
    }
    let app_options = match AppOptions::load(None) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config ignored: {e}");
            AppOptions::default()
        }
    };
    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, app_options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
