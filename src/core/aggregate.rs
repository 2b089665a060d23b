// src/core/aggregate.rs
//
// Single forward pass over the records. Everything is keyed in first-seen
// order so later stable sorts break ties by encounter order.

use indexmap::IndexMap;

use crate::config::consts::COUNTRY_AGGREGATE_REGION;
use crate::error::Result;
use super::record::{normalize, RawRecord};

/// Salary samples per publication year.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct YearGroups {
    pub all: IndexMap<i32, Vec<f64>>,
    /// Only postings whose name contains the target profession.
    pub profession: IndexMap<i32, Vec<f64>>,
}

/// Salary samples per region; the sample count doubles as the posting count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionGroups {
    pub samples: IndexMap<String, Vec<f64>>,
}

impl RegionGroups {
    pub fn count(&self, region: &str) -> usize {
        self.samples.get(region).map_or(0, Vec::len)
    }
}

/// Raw groupings handed to the finalizer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Groups {
    pub years: YearGroups,
    pub regions: RegionGroups,
    pub total_count: usize,
}

impl Groups {
    /// Fold another partition's groupings into this one.
    /// Per key: self's samples first, then other's. New keys keep other's
    /// first-seen order, appended after self's keys.
    pub fn merge(&mut self, other: Groups) {
        fn concat<K: std::hash::Hash + Eq>(into: &mut IndexMap<K, Vec<f64>>, from: IndexMap<K, Vec<f64>>) {
            for (k, mut v) in from {
                into.entry(k).or_default().append(&mut v);
            }
        }
        concat(&mut self.years.all, other.years.all);
        concat(&mut self.years.profession, other.years.profession);
        concat(&mut self.regions.samples, other.regions.samples);
        self.total_count += other.total_count;
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Streams raw records into `Groups`.
pub struct Aggregator {
    target: String,
    groups: Groups,
}

impl Aggregator {
    pub fn new(target_profession: impl Into<String>) -> Self {
        Self { target: target_profession.into(), groups: Groups::default() }
    }

    pub fn target(&self) -> &str { &self.target }

    /// Case-sensitive literal substring test; an empty target never matches.
    pub fn matches_profession(&self, name: &str) -> bool {
        !self.target.is_empty() && name.contains(self.target.as_str())
    }

    pub fn push(&mut self, raw: &RawRecord) -> Result<()> {
        let rec = normalize(raw)?;
        let matched = self.matches_profession(&rec.profession_name);
        let g = &mut self.groups;

        g.years.all.entry(rec.publication_year).or_default().push(rec.average_salary);
        if matched {
            g.years.profession.entry(rec.publication_year).or_default().push(rec.average_salary);
        }
        if rec.region_name != COUNTRY_AGGREGATE_REGION {
            g.regions.samples.entry(rec.region_name).or_default().push(rec.average_salary);
        }
        g.total_count += 1;
        Ok(())
    }

    pub fn ingested(&self) -> usize { self.groups.total_count }

    pub fn finish(self) -> Groups {
        logd!(
            "Aggregate: records={}, years={}, profession_years={}, regions={}",
            self.groups.total_count,
            self.groups.years.all.len(),
            self.groups.years.profession.len(),
            self.groups.regions.samples.len()
        );
        self.groups
    }
}

/// One-shot pass over an in-memory sequence of records.
pub fn ingest<'a, I>(records: I, target_profession: &str) -> Result<Groups>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut agg = Aggregator::new(target_profession);
    for raw in records {
        agg.push(raw)?;
    }
    Ok(agg.finish())
}
