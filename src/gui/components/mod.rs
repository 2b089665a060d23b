// src/gui/components/mod.rs
pub mod data_table;
pub mod side_panel;
pub mod tabs;
