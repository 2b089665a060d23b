// src/core/record.rs
//
// RawRecord: the six string fields the statistics need, straight from the source.
// NormalizedRecord: the same posting reduced to year, region and one RUR salary.

use crate::error::{Result, StatsError};
use super::currency::CurrencyTable;

/// Column names a stats dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "name",
    "salary_from",
    "salary_to",
    "salary_currency",
    "area_name",
    "published_at",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub name: String,
    pub salary_from: String,
    pub salary_to: String,
    pub salary_currency: String,
    pub area_name: String,
    pub published_at: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedRecord {
    pub profession_name: String,
    pub region_name: String,
    pub publication_year: i32,
    pub average_salary: f64,
}

/// Parse a salary bound: "100", "100.0", "99.9" → 100, 100, 99.
pub fn parse_salary(s: &str) -> Result<i64> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| StatsError::MalformedSalary(s!(s)))?;
    if !v.is_finite() {
        return Err(StatsError::MalformedSalary(s!(s)));
    }
    Ok(v.trunc() as i64)
}

/// Year from the first four characters of an ISO-8601-ish timestamp.
pub fn parse_year(published_at: &str) -> Result<i32> {
    let head = published_at.as_bytes().get(..4);
    match head {
        Some(b) if b.iter().all(u8::is_ascii_digit) => Ok(b
            .iter()
            .fold(0i32, |acc, d| acc * 10 + i32::from(d - b'0'))),
        _ => Err(StatsError::MalformedDate(s!(published_at))),
    }
}

pub fn normalize(raw: &RawRecord) -> Result<NormalizedRecord> {
    let from = parse_salary(&raw.salary_from)?;
    let to = parse_salary(&raw.salary_to)?;
    let rate = CurrencyTable::rate(&raw.salary_currency)?;
    let publication_year = parse_year(&raw.published_at)?;

    Ok(NormalizedRecord {
        profession_name: raw.name.clone(),
        region_name: raw.area_name.clone(),
        publication_year,
        average_salary: rate * (from + to) as f64 / 2.0,
    })
}
