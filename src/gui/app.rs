// src/gui/app.rs
use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::AppState},
    core::finalize::FinalizedTables,
    error::BoxError,
    runner,
};

use super::{pages::Page, progress::GuiProgress, router};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), BoxError> {
    eframe::run_native(
        "Vacancy Stats",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::from_options(app_options))))),
    )
    .map_err(|e| format!("GUI failed: {e}"))?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful run
    pub tables: Option<FinalizedTables>,
    /// Profession the tables were computed for (headers follow it, not the text field).
    pub tables_profession: String,
    pub files_written: Vec<PathBuf>,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: input={:?}, profession={:?}", state.gui.input_text, state.gui.profession_text);
        Self {
            state,
            tables: None,
            tables_profession: s!(),
            files_written: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Current page's headers and rows, empty before the first run.
    pub fn view(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let page = self.current_page();
        let headers = page.headers(&self.tables_profession);
        let rows = self
            .tables
            .as_ref()
            .map(|t| page.rows(t, &self.tables_profession))
            .unwrap_or_default();
        (headers, rows)
    }

    /// Run the stats pipeline on the UI thread with the side-panel inputs.
    pub fn run_stats(&mut self) {
        self.state.sync_gui_into_options();
        let mut progress = GuiProgress::new(Arc::clone(&self.status));
        match runner::run_stats(&self.state.options, Some(&mut progress)) {
            Ok(run) => {
                logf!("UI: stats done, {} files written", run.files_written.len());
                self.status(format!(
                    "Done: {} years, {} regions ({:.2}% of postings listed)",
                    run.tables.salary_by_year.len(),
                    run.tables.share_by_region_top10.len(),
                    run.tables.listed_share() * 100.0
                ));
                self.tables = Some(run.tables);
                self.tables_profession = self.state.options.stats.profession.clone();
                self.files_written = run.files_written;
            }
            Err(e) => {
                loge!("UI: stats failed: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        eframe::egui::SidePanel::left("inputs")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::side_panel::draw(ui, self);
            });

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
