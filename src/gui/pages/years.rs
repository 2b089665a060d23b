// src/gui/pages/years.rs
use crate::config::consts::YEARS_SHEET;
use crate::core::finalize::FinalizedTables;
use crate::render::sheet::years_sheet;
use super::Page;

pub struct YearsPage;
pub static PAGE: YearsPage = YearsPage;

impl Page for YearsPage {
    fn label(&self) -> &'static str { YEARS_SHEET }

    fn headers(&self, profession: &str) -> Vec<String> {
        years_sheet(&FinalizedTables::default(), profession).headers
    }

    fn rows(&self, tables: &FinalizedTables, profession: &str) -> Vec<Vec<String>> {
        years_sheet(tables, profession).rows
    }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[60.0, 140.0, 220.0, 160.0, 240.0])
    }
}
