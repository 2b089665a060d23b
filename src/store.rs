// src/store.rs
//
// Opening a dataset file and mapping its rows to the typed records.

use std::path::Path;

use csv::StringRecord;

use crate::config::consts::PROGRESS_EVERY;
use crate::core::aggregate::{Aggregator, Groups};
use crate::core::currency::{CurrencyTable, REFERENCE};
use crate::core::record::{parse_salary, RawRecord, REQUIRED_COLUMNS};
use crate::csv::{column_index, RowSource};
use crate::error::{Result, StatsError};
use crate::listing::vacancy::{Salary, Vacancy};
use crate::progress::Progress;

/* ---------------- Stats mode ---------------- */

/// Positions of the six required columns.
#[derive(Clone, Copy, Debug)]
pub struct StatsColumns {
    ix: [usize; 6],
}

impl StatsColumns {
    pub fn from_header(header: &[String]) -> Result<Self> {
        let mut ix = [0; 6];
        for (slot, name) in ix.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = column_index(header, name).ok_or(StatsError::MissingColumn(name))?;
        }
        Ok(Self { ix })
    }

    pub fn record(&self, row: &StringRecord) -> RawRecord {
        let cell = |k: usize| s!(row.get(self.ix[k]).unwrap_or_default());
        RawRecord {
            name: cell(0),
            salary_from: cell(1),
            salary_to: cell(2),
            salary_currency: cell(3),
            area_name: cell(4),
            published_at: cell(5),
        }
    }
}

/// One streaming pass over `path` into `Groups`.
/// A file without a header row yields empty groups.
pub fn aggregate_file(path: &Path, target: &str, progress: &mut dyn Progress) -> Result<Groups> {
    let mut src = RowSource::open(path)?;
    if src.is_empty_file() {
        logw!("Store: {} is empty", path.display());
        return Ok(Groups::default());
    }
    let cols = StatsColumns::from_header(src.header())?;
    let mut agg = Aggregator::new(target);
    for row in src.by_ref() {
        agg.push(&cols.record(&row?))?;
        if agg.ingested() % PROGRESS_EVERY == 0 {
            progress.rows_read(agg.ingested());
        }
    }
    progress.rows_read(agg.ingested());
    logf!(
        "Store: {} -> {} records, {} incomplete rows skipped",
        path.display(),
        agg.ingested(),
        src.skipped()
    );
    Ok(agg.finish())
}

/* ---------------- Listing mode ---------------- */

/// Optional column positions; absent columns read as empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListingColumns {
    name: Option<usize>,
    description: Option<usize>,
    key_skills: Option<usize>,
    experience_id: Option<usize>,
    premium: Option<usize>,
    employer_name: Option<usize>,
    salary_from: Option<usize>,
    salary_to: Option<usize>,
    salary_gross: Option<usize>,
    salary_currency: Option<usize>,
    area_name: Option<usize>,
    published_at: Option<usize>,
}

impl ListingColumns {
    pub fn from_header(header: &[String]) -> Self {
        let at = |name: &str| column_index(header, name);
        Self {
            name: at("name"),
            description: at("description"),
            key_skills: at("key_skills"),
            experience_id: at("experience_id"),
            premium: at("premium"),
            employer_name: at("employer_name"),
            salary_from: at("salary_from"),
            salary_to: at("salary_to"),
            salary_gross: at("salary_gross"),
            salary_currency: at("salary_currency"),
            area_name: at("area_name"),
            published_at: at("published_at"),
        }
    }

    /// Missing salary bounds read as 0, a missing currency as RUR.
    pub fn vacancy(&self, row: &StringRecord) -> Result<Vacancy> {
        let get = |ix: Option<usize>| ix.and_then(|i| row.get(i)).unwrap_or_default();
        let bound = |ix: Option<usize>| match ix {
            Some(_) => parse_salary(get(ix)),
            None => Ok(0),
        };
        let currency = match self.salary_currency {
            Some(_) => get(self.salary_currency),
            None => REFERENCE,
        };
        CurrencyTable::rate(currency)?;
        let salary = Salary {
            from: bound(self.salary_from)?,
            to: bound(self.salary_to)?,
            gross: s!(get(self.salary_gross)),
            currency: s!(currency),
        };
        Ok(Vacancy::new(
            get(self.name),
            get(self.description),
            get(self.key_skills),
            get(self.experience_id),
            get(self.premium),
            get(self.employer_name),
            salary,
            get(self.area_name),
            get(self.published_at),
        ))
    }
}

/// What a listing load found.
#[derive(Debug, Default)]
pub struct VacancyLoad {
    /// No header row at all.
    pub empty_file: bool,
    pub vacancies: Vec<Vacancy>,
}

pub fn load_vacancies(path: &Path, progress: &mut dyn Progress) -> Result<VacancyLoad> {
    let mut src = RowSource::open(path)?;
    if src.is_empty_file() {
        return Ok(VacancyLoad { empty_file: true, vacancies: Vec::new() });
    }
    let cols = ListingColumns::from_header(src.header());
    let mut vacancies = Vec::new();
    for row in src.by_ref() {
        vacancies.push(cols.vacancy(&row?)?);
        if vacancies.len() % PROGRESS_EVERY == 0 {
            progress.rows_read(vacancies.len());
        }
    }
    progress.rows_read(vacancies.len());
    logf!(
        "Store: {} -> {} postings, {} incomplete rows skipped",
        path.display(),
        vacancies.len(),
        src.skipped()
    );
    Ok(VacancyLoad { empty_file: false, vacancies })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| s!(*n)).collect()
    }

    #[test]
    fn stats_columns_by_name() {
        let h = header(&["published_at", "area_name", "x", "salary_currency", "salary_to", "salary_from", "name"]);
        let cols = StatsColumns::from_header(&h).unwrap();
        let row = StringRecord::from(vec!["2022-01-01", "Москва", "?", "RUR", "20", "10", "Dev"]);
        let rec = cols.record(&row);
        assert_eq!(rec.name, "Dev");
        assert_eq!(rec.salary_from, "10");
        assert_eq!(rec.area_name, "Москва");
    }

    #[test]
    fn missing_required_column() {
        let h = header(&["name", "salary_from", "salary_to", "area_name", "published_at"]);
        match StatsColumns::from_header(&h) {
            Err(StatsError::MissingColumn(c)) => assert_eq!(c, "salary_currency"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn listing_defaults() {
        let cols = ListingColumns::from_header(&header(&["name", "salary_from", "salary_to"]));
        let v = cols.vacancy(&StringRecord::from(vec!["Dev", "100.5", "200"])).unwrap();
        assert_eq!(v.salary.currency, "RUR");
        assert_eq!((v.salary.from, v.salary.to), (100, 200));
        assert_eq!(v.area_name, "");

        let cols = ListingColumns::from_header(&header(&["name", "salary_currency"]));
        assert!(matches!(
            cols.vacancy(&StringRecord::from(vec!["Dev", "XXX"])),
            Err(StatsError::UnknownCurrency(_))
        ));
    }
}
