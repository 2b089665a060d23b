// src/gui/pages/regions.rs
//
// The two region tables, one tab each.

use crate::core::finalize::FinalizedTables;
use crate::listing::labels as L;
use crate::render::report::percent_comma;
use super::Page;

pub struct SalaryPage;
pub static SALARY_PAGE: SalaryPage = SalaryPage;

impl Page for SalaryPage {
    fn label(&self) -> &'static str { L::SALARY_LEVEL }

    fn headers(&self, _profession: &str) -> Vec<String> {
        cells![L::REGION, L::SALARY_LEVEL]
    }

    fn rows(&self, tables: &FinalizedTables, _profession: &str) -> Vec<Vec<String>> {
        tables.salary_by_region_top10.iter().map(|(k, v)| cells![k, v]).collect()
    }
}

pub struct SharePage;
pub static SHARE_PAGE: SharePage = SharePage;

impl Page for SharePage {
    fn label(&self) -> &'static str { L::VACANCY_SHARE }

    fn headers(&self, _profession: &str) -> Vec<String> {
        cells![L::REGION, L::VACANCY_SHARE]
    }

    fn rows(&self, tables: &FinalizedTables, _profession: &str) -> Vec<Vec<String>> {
        tables
            .share_by_region_top10
            .iter()
            .map(|(k, v)| vec![k.clone(), percent_comma(*v)])
            .collect()
    }
}
