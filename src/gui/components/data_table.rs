// src/gui/components/data_table.rs
//
// Draws the current page's table. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let (headers, rows) = app.view();
    let widths = page.preferred_column_widths();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("table_state", page.label()));
    for ci in 0..headers.len() {
        let col = match widths.and_then(|w| w.get(ci)) {
            Some(&w) => Column::initial(w).resizable(true).clip(true),
            None => Column::auto().resizable(true),
        };
        table = table.column(col);
    }

    table
        .header(24.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let r = &rows[row.index()];
                for cell in r {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });

    if rows.is_empty() {
        ui.label("No data yet. Pick a dataset and press Run.");
    }
}
