// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::years::PAGE,
    &pages::regions::SALARY_PAGE,
    &pages::regions::SHARE_PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
