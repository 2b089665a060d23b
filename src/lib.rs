// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod listing;
pub mod render;

pub mod file;
#[cfg(feature = "gui")]
pub mod gui;
pub mod progress;
pub mod runner;
pub mod store;
