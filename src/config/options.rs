// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BoxError;
use super::consts::*;

/// Everything a run needs besides the dataset itself.
/// Loaded from `vacancy_stats.toml` when present; CLI flags override it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub stats: StatsOptions,
    pub export: ExportOptions,
    pub report: ReportOptions,
}

impl AppOptions {
    /// Explicit path must exist; otherwise fall back to `CONFIG_FILE` in the
    /// working directory, then to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, BoxError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(CONFIG_FILE);
                if !p.is_file() {
                    logd!("Config: no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                p
            }
        };
        let text = fs::read_to_string(&path)
            .map_err(|e| format!("Cannot read config {}: {e}", path.display()))?;
        let opts = Self::from_toml(&text)?;
        logf!("Config: loaded {}", path.display());
        Ok(opts)
    }

    pub fn from_toml(text: &str) -> Result<Self, BoxError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String, BoxError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    pub profession: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub enabled: bool,
    pub dir: PathBuf,
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<sheet>.<ext>`
    pub fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.dir.join(join!(sheet, ".", self.format.ext()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_REPORT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let opts = AppOptions::from_toml(
            r#"
            [stats]
            profession = "Программист"

            [export]
            format = "tsv"
            "#,
        )
        .unwrap();
        assert_eq!(opts.stats.profession, "Программист");
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(opts.export.include_headers);
        assert_eq!(opts.report, ReportOptions::default());
    }

    #[test]
    fn sheet_path_follows_format() {
        let mut export = ExportOptions::default();
        assert!(export.sheet_path(YEARS_SHEET).to_string_lossy().ends_with("Статистика по годам.csv"));
        export.format = ExportFormat::Tsv;
        assert!(export.sheet_path(YEARS_SHEET).to_string_lossy().ends_with(".tsv"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(AppOptions::from_toml("[export]\nformat = \"xlsx\"").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let mut opts = AppOptions::default();
        opts.stats.profession = s!("Аналитик");
        let back = AppOptions::from_toml(&opts.to_toml().unwrap()).unwrap();
        assert_eq!(back, opts);
    }
}
