// src/gui/components/side_panel.rs
//
// Left panel: dataset path, profession, output switches, run/copy buttons.

use eframe::egui;

use crate::csv::table_to_string;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Dataset");

    ui.label("CSV file");
    ui.text_edit_singleline(&mut app.state.gui.input_text);
    ui.label("Profession");
    ui.text_edit_singleline(&mut app.state.gui.profession_text);

    ui.separator();

    let opts = &mut app.state.options;
    ui.checkbox(&mut opts.export.enabled, "Export sheets");
    ui.checkbox(&mut opts.export.include_headers, "Include headers");
    ui.checkbox(&mut opts.report.enabled, "Write HTML report");

    ui.separator();

    let ready = !app.state.gui.input_text.trim().is_empty();
    if ui.add_enabled(ready, egui::Button::new("Run")).clicked() {
        app.run_stats();
    }

    let has_rows = app.tables.is_some();
    if ui.add_enabled(has_rows, egui::Button::new("Copy table")).clicked() {
        let (headers, rows) = app.view();
        let text = table_to_string(Some(headers.as_slice()), &rows, b'\t');
        ui.ctx().copy_text(text);
        app.status(format!("Copied {} rows", rows.len()));
    }

    ui.separator();
    ui.label(app.status_text());
    for p in &app.files_written {
        ui.small(p.display().to_string());
    }
}
