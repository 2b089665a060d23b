// src/gui/pages/mod.rs
use crate::core::finalize::FinalizedTables;

pub mod regions;
pub mod years;

/// One tab of the viewer: a fixed projection of the finalized tables.
pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;

    fn headers(&self, profession: &str) -> Vec<String>;

    fn rows(&self, tables: &FinalizedTables, profession: &str) -> Vec<Vec<String>>;

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { None }
}
