// src/render/sheet.rs
//
// Spreadsheet export: the year sheet and the region sheet, one CSV/TSV file each.

use std::path::PathBuf;

use crate::config::consts::{REGIONS_SHEET, YEARS_SHEET};
use crate::config::options::ExportOptions;
use crate::core::finalize::FinalizedTables;
use crate::error::BoxError;
use crate::file::write_table_file;
use crate::listing::labels as L;

/// A header row plus data rows, ready for the writer.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    pub name: &'static str,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Year, salary, salary for the profession, count, count for the profession.
/// Years the profession tables lack get a blank cell.
pub fn years_sheet(t: &FinalizedTables, profession: &str) -> Sheet {
    let headers = vec![
        s!(L::YEAR),
        s!(L::AVG_SALARY),
        L::for_profession(L::AVG_SALARY, profession),
        s!(L::VACANCY_COUNT),
        L::for_profession(L::VACANCY_COUNT, profession),
    ];
    let opt = |v: Option<String>| v.unwrap_or_default();
    let rows = t
        .salary_by_year
        .iter()
        .map(|(year, salary)| {
            vec![
                year.to_string(),
                salary.to_string(),
                opt(t.salary_by_year_for_profession.get(year).map(|v| v.to_string())),
                opt(t.count_by_year.get(year).map(|v| v.to_string())),
                opt(t.count_by_year_for_profession.get(year).map(|v| v.to_string())),
            ]
        })
        .collect();
    Sheet { name: YEARS_SHEET, headers, rows }
}

/// Salary table and share table side by side, a blank column between.
pub fn regions_sheet(t: &FinalizedTables) -> Sheet {
    let headers = vec![s!(L::REGION), s!(L::SALARY_LEVEL), s!(), s!(L::REGION), s!(L::VACANCY_SHARE)];
    let rows = t
        .salary_by_region_top10
        .iter()
        .zip(t.share_by_region_top10.iter())
        .map(|((r1, salary), (r2, share))| {
            vec![r1.clone(), salary.to_string(), s!(), r2.clone(), percent(*share)]
        })
        .collect();
    Sheet { name: REGIONS_SHEET, headers, rows }
}

/// 0.3333 → "33.33%"
pub fn percent(share: f64) -> String {
    format!("{:.2}%", share * 100.0)
}

/// Write both sheets under `opts.dir`; returns the files written.
pub fn export_sheets(
    t: &FinalizedTables,
    profession: &str,
    opts: &ExportOptions,
) -> Result<Vec<PathBuf>, BoxError> {
    let mut written = Vec::with_capacity(2);
    for sheet in [years_sheet(t, profession), regions_sheet(t)] {
        let path = opts.sheet_path(sheet.name);
        let headers = opts.include_headers.then_some(sheet.headers.as_slice());
        written.push(write_table_file(&path, headers, &sheet.rows, opts.format.delim())?);
        logf!("Export: {} rows -> {}", sheet.rows.len(), path.display());
    }
    Ok(written)
}
