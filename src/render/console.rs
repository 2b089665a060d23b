// src/render/console.rs
//
// Plain-text output: the boxed table used by the listing and the
// dictionary-style printout of the six statistics tables.

use std::fmt::Display;

use crate::core::finalize::{FinalizedTables, YearTable};
use crate::listing::labels as L;

/// Boxed, left-aligned table with a rule between every row.
#[derive(Clone, Debug, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_width: Vec<Option<usize>>,
}

impl TextTable {
    pub fn new(headers: Vec<String>) -> Self {
        let max_width = vec![None; headers.len()];
        Self { headers, rows: Vec::new(), max_width }
    }

    /// Wrap cells of column `header` at `width` characters.
    pub fn wrap_column(&mut self, header: &str, width: usize) {
        if let Some(ix) = self.headers.iter().position(|h| h == header) {
            self.max_width[ix] = Some(width.max(1));
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn render(&self) -> String {
        let cells: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| {
                (0..self.headers.len())
                    .map(|ix| {
                        let text = row.get(ix).map_or("", String::as_str);
                        match self.max_width[ix] {
                            Some(w) => wrap(text, w),
                            None => text.split('\n').map(String::from).collect(),
                        }
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(ix, h)| {
                cells
                    .iter()
                    .flat_map(|row| row[ix].iter())
                    .map(|line| width_of(line))
                    .fold(width_of(h), usize::max)
            })
            .collect();

        let rule = {
            let mut r = s!("+");
            for w in &widths {
                r.push_str(&"-".repeat(w + 2));
                r.push('+');
            }
            r
        };

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        push_line(&mut out, &widths, |ix| self.headers[ix].as_str());
        out.push('\n');
        out.push_str(&rule);
        for row in &cells {
            let height = row.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                out.push('\n');
                push_line(&mut out, &widths, |ix| row[ix].get(line).map_or("", String::as_str));
            }
            out.push('\n');
            out.push_str(&rule);
        }
        out
    }
}

fn push_line<'a>(out: &mut String, widths: &[usize], cell: impl Fn(usize) -> &'a str) {
    out.push('|');
    for (ix, w) in widths.iter().enumerate() {
        let text = cell(ix);
        out.push(' ');
        out.push_str(text);
        out.push_str(&" ".repeat(w - width_of(text) + 1));
        out.push('|');
    }
}

fn width_of(s: &str) -> usize {
    s.chars().count()
}

/// Greedy word wrap per line of `text`; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for para in text.split('\n') {
        let mut cur = String::new();
        let mut cur_w = 0;
        for word in para.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while !word.is_empty() {
                let sep = usize::from(cur_w > 0);
                if cur_w + sep + word.len() <= width {
                    if sep == 1 { cur.push(' '); }
                    cur_w += sep + word.len();
                    cur.extend(word.drain(..));
                } else if cur_w > 0 {
                    lines.push(std::mem::take(&mut cur));
                    cur_w = 0;
                } else {
                    cur.extend(word.drain(..width));
                    lines.push(std::mem::take(&mut cur));
                }
            }
        }
        lines.push(cur);
    }
    lines
}

/* ---------------- Statistics printout ---------------- */

/// `{2007: 38916, 2008: 43646}` / `{'Москва': 0.3164}`
fn dict<K: Display, V>(items: impl Iterator<Item = (K, V)>, quote: bool, fmt: impl Fn(V) -> String) -> String {
    let body: Vec<String> = items
        .map(|(k, v)| if quote { format!("'{k}': {}", fmt(v)) } else { format!("{k}: {}", fmt(v)) })
        .collect();
    join!("{", &body.join(", "), "}")
}

/// 0.5 → "0.5", 1 → "1.0"
pub fn float_text(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() { format!("{v:.1}") } else { format!("{v}") }
}

/// The six tables, one captioned line each.
pub fn stats_text(t: &FinalizedTables) -> String {
    let years = |m: &YearTable<i64>| dict(m.iter(), false, |v| v.to_string());
    let counts = |m: &YearTable<usize>| dict(m.iter(), false, |v| v.to_string());
    [
        format!("{}: {}", L::SALARY_BY_YEAR, years(&t.salary_by_year)),
        format!("{}: {}", L::COUNT_BY_YEAR, counts(&t.count_by_year)),
        format!("{}: {}", L::SALARY_BY_YEAR_PROF, years(&t.salary_by_year_for_profession)),
        format!("{}: {}", L::COUNT_BY_YEAR_PROF, counts(&t.count_by_year_for_profession)),
        format!("{}: {}", L::SALARY_BY_REGION, dict(t.salary_by_region_top10.iter(), true, |v| v.to_string())),
        format!("{}: {}", L::SHARE_BY_REGION, dict(t.share_by_region_top10.iter(), true, |v| float_text(*v))),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::finalize::RegionTable;

    #[test]
    fn boxed_table() {
        let mut t = TextTable::new(cells!["№", "Имя"]);
        t.push(cells![1, "Иван"]);
        t.push(cells![2, "Ян"]);
        let expected = "\
+---+------+
| № | Имя  |
+---+------+
| 1 | Иван |
+---+------+
| 2 | Ян   |
+---+------+";
        assert_eq!(t.render(), expected);
    }

    #[test]
    fn header_only_table() {
        let t = TextTable::new(cells!["№", "Название"]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, ["+---+----------+", "| № | Название |", "+---+----------+"]);
    }

    #[test]
    fn wrapped_cells_grow_rows() {
        let mut t = TextTable::new(cells!["a", "b"]);
        t.wrap_column("b", 5);
        t.push(cells!["x", "один два"]);
        let expected = "\
+---+------+
| a | b    |
+---+------+
| x | один |
|   | два  |
+---+------+";
        assert_eq!(t.render(), expected);
    }

    #[test]
    fn wrapping() {
        assert_eq!(wrap("aaa bbb ccc", 7), ["aaa bbb", "ccc"]);
        assert_eq!(wrap("abcdefgh", 3), ["abc", "def", "gh"]);
        assert_eq!(wrap("a\nb", 10), ["a", "b"]);
        assert_eq!(wrap("", 10), [""]);
    }

    #[test]
    fn stats_lines() {
        let t = FinalizedTables {
            salary_by_year: YearTable::<i64>::from([(2022, 3666)]),
            count_by_year: YearTable::<usize>::from([(2022, 3)]),
            salary_by_year_for_profession: YearTable::<i64>::from([(2022, 0)]),
            count_by_year_for_profession: YearTable::<usize>::from([(2022, 0)]),
            salary_by_region_top10: RegionTable::<i64>::from([(s!("Москва"), 5000)]),
            share_by_region_top10: RegionTable::<f64>::from([(s!("Москва"), 1.0)]),
        };
        let text = stats_text(&t);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Динамика уровня зарплат по годам: {2022: 3666}");
        assert_eq!(lines[4], "Уровень зарплат по городам (в порядке убывания): {'Москва': 5000}");
        assert_eq!(lines[5], "Доля вакансий по городам (в порядке убывания): {'Москва': 1.0}");
        assert_eq!(float_text(0.3333), "0.3333");
    }
}
