// src/listing/mod.rs
//
// Listing mode: individual postings as a console table.

pub mod labels;
pub mod query;
pub mod vacancy;

pub use query::{Query, QueryError, QueryInput};
pub use vacancy::{Salary, Vacancy};

use crate::config::consts::CELL_MAX_WIDTH;
use crate::render::console::TextTable;
use labels::{NUMBER_COLUMN, TABLE_COLUMNS};

/// Numbered table of `selected`, cut to the query's row window and columns.
/// Numbers follow the selection order, before the window is applied.
pub fn listing_table(selected: &[&Vacancy], query: &Query) -> TextTable {
    let visible = query.visible_columns();
    let keep: Vec<usize> = TABLE_COLUMNS
        .into_iter()
        .enumerate()
        .filter(|(_, c)| visible.contains(c))
        .map(|(ix, _)| ix)
        .collect();

    let mut table = TextTable::new(visible.iter().map(|c| s!(*c)).collect());
    for col in &visible {
        if *col != NUMBER_COLUMN {
            table.wrap_column(col, CELL_MAX_WIDTH);
        }
    }

    let (lo, hi) = query.range.bounds(selected.len());
    for (ix, v) in selected.iter().enumerate().take(hi).skip(lo) {
        let mut full = vec![(ix + 1).to_string()];
        full.extend(v.to_cells());
        table.push(keep.iter().map(|&k| full[k].clone()).collect());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vac(name: &str) -> Vacancy {
        let salary = Salary { from: 1, to: 2, gross: s!("false"), currency: s!("RUR") };
        Vacancy::new(name, "d", "s", "noExperience", "false", "e", salary, "Москва", "2022-01-02T00:00:00+0300")
    }

    #[test]
    fn window_and_columns() {
        let all: Vec<Vacancy> = ["a", "b", "c", "d"].into_iter().map(vac).collect();
        let query = Query::parse(&QueryInput {
            range: s!("2 4"),
            columns: s!("Название"),
            ..Default::default()
        })
        .unwrap();
        let selected = query.select(&all);
        let text = listing_table(&selected, &query).render();
        let expected = "\
+---+----------+
| № | Название |
+---+----------+
| 2 | b        |
+---+----------+
| 3 | c        |
+---+----------+";
        assert_eq!(text, expected);
    }
}
