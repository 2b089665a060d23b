// src/runner.rs
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{
    config::options::AppOptions,
    core::finalize::{finalize, FinalizedTables},
    error::{BoxError, Result},
    listing::{listing_table, Query},
    progress::Progress,
    render::{console::TextTable, report::write_report, sheet::export_sheets},
    store::{aggregate_file, load_vacancies},
};

/// Summary of what a stats run produced.
pub struct StatsRun {
    pub tables: FinalizedTables,
    pub files_written: Vec<PathBuf>,
}

/// Dataset → six tables, nothing written.
pub fn compute_stats(input: &Path, profession: &str, progress: &mut dyn Progress) -> Result<FinalizedTables> {
    progress.begin("aggregate");
    let groups = aggregate_file(input, profession, progress);
    progress.finish();
    Ok(finalize(&groups?))
}

/// Full stats pipeline: tables, then the sheet export and the report as enabled.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run_stats(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> std::result::Result<StatsRun, BoxError> {
    let mut null = crate::progress::NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let input = opts.stats.input.as_deref().ok_or("No dataset file given")?;
    let profession = opts.stats.profession.as_str();

    let tables = compute_stats(input, profession, progress)?;
    logf!(
        "Stats: {} years, {} regions listed for {:?}",
        tables.salary_by_year.len(),
        tables.share_by_region_top10.len(),
        profession
    );

    let mut files_written = Vec::new();
    if opts.export.enabled {
        progress.begin("export");
        files_written.extend(export_sheets(&tables, profession, &opts.export)?);
        progress.finish();
    }
    if opts.report.enabled {
        progress.begin("report");
        files_written.push(write_report(&tables, profession, &opts.report.path)?);
        progress.finish();
    }
    for p in &files_written {
        progress.log(&format!("Wrote {}", p.display()));
    }
    Ok(StatsRun { tables, files_written })
}

/* ---------------- Listing ---------------- */

pub enum ListingOutcome {
    /// No header row at all.
    EmptyFile,
    /// Header but no complete row.
    NoData,
    /// The filter removed every posting.
    NothingFound,
    Table(TextTable),
}

impl fmt::Display for ListingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingOutcome::EmptyFile => f.write_str("Пустой файл"),
            ListingOutcome::NoData => f.write_str("Нет данных"),
            ListingOutcome::NothingFound => f.write_str("Ничего не найдено"),
            ListingOutcome::Table(t) => f.write_str(&t.render()),
        }
    }
}

pub fn run_listing(input: &Path, query: &Query, progress: &mut dyn Progress) -> Result<ListingOutcome> {
    progress.begin("load");
    let load = load_vacancies(input, progress);
    progress.finish();
    let load = load?;
    if load.empty_file {
        return Ok(ListingOutcome::EmptyFile);
    }
    if load.vacancies.is_empty() {
        return Ok(ListingOutcome::NoData);
    }
    let selected = query.select(&load.vacancies);
    logd!("Listing: {} of {} postings selected", selected.len(), load.vacancies.len());
    if selected.is_empty() {
        return Ok(ListingOutcome::NothingFound);
    }
    Ok(ListingOutcome::Table(listing_table(&selected, query)))
}
