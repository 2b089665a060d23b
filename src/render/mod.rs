// src/render/mod.rs

pub mod console;
pub mod report;
pub mod sheet;

pub use console::TextTable;
