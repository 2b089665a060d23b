// src/listing/query.rs
//
// Filter / sort / range / columns selections for the listing table.

use std::cmp::Ordering;

use thiserror::Error;

use crate::config::consts::RANGE_END_DEFAULT;
use crate::core::currency::CurrencyTable;
use super::labels::{experience_id, yes_no, Field, NUMBER_COLUMN, TABLE_COLUMNS};
use super::vacancy::Vacancy;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Формат ввода некорректен")]
    FilterFormat,
    #[error("Параметр поиска некорректен")]
    FilterField,
    #[error("Значение фильтра некорректно: {0}")]
    FilterValue(String),
    #[error("Параметр сортировки некорректен")]
    SortField,
    #[error("Порядок сортировки задан некорректно")]
    SortOrder,
    #[error("Диапазон вывода некорректен")]
    Range,
    #[error("Неизвестный столбец: {0}")]
    Column(String),
}

/// Raw user answers, as typed.
#[derive(Clone, Debug, Default)]
pub struct QueryInput {
    pub filter: String,
    pub sort: String,
    pub reverse: String,
    pub range: String,
    pub columns: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Currency code resolved from its Russian name; `None` matches nothing.
    Currency(Option<&'static str>),
    /// "Да" / "Нет"
    Premium(String),
    Gross(String),
    /// Experience id resolved from its label; `None` matches nothing.
    Experience(Option<&'static str>),
    /// Inside the salary fork, bounds included.
    Salary(f64),
    /// Every listed skill present.
    Skills(Vec<String>),
    /// dd.mm.yyyy
    Date(String),
    Equals(Field, String),
}

impl Filter {
    /// "<Поле>: <значение>"; empty input means no filter.
    pub fn parse(input: &str) -> Result<Option<Filter>, QueryError> {
        if input.is_empty() {
            return Ok(None);
        }
        let (label, value) = input.split_once(':').ok_or(QueryError::FilterFormat)?;
        let field = Field::from_label(label.trim()).ok_or(QueryError::FilterField)?;
        let value = value.trim();
        let filter = match field {
            Field::SalaryCurrency => Filter::Currency(CurrencyTable::code_for_name(value)),
            Field::Premium => Filter::Premium(s!(value)),
            Field::SalaryGross => Filter::Gross(s!(value)),
            Field::Experience => Filter::Experience(experience_id(value)),
            Field::Salary => Filter::Salary(
                value.parse().map_err(|_| QueryError::FilterValue(s!(value)))?,
            ),
            Field::KeySkills => Filter::Skills(value.split(", ").map(String::from).collect()),
            Field::PublishedAt => Filter::Date(s!(value)),
            other => Filter::Equals(other, s!(value)),
        };
        Ok(Some(filter))
    }

    pub fn matches(&self, v: &Vacancy) -> bool {
        match self {
            Filter::Currency(code) => code.is_some_and(|c| v.salary.currency == c),
            Filter::Premium(want) => v.premium_display().contains(want.as_str()),
            Filter::Gross(want) => yes_no(&v.salary.gross) == *want,
            Filter::Experience(id) => id.is_some_and(|i| v.experience_id == i),
            Filter::Salary(x) => v.salary.contains(*x),
            Filter::Skills(skills) => skills.iter().all(|s| v.key_skills.contains(s)),
            Filter::Date(d) => v.date_display() == *d,
            Filter::Equals(field, want) => text_of(v, *field) == want.as_str(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub field: Field,
    pub reverse: bool,
}

impl Sort {
    /// Field label plus "Да" / "Нет" / "" for the order.
    pub fn parse(field: &str, reverse: &str) -> Result<Option<Sort>, QueryError> {
        let (field, reverse) = (field.trim(), reverse.trim());
        let field = match field {
            "" => None,
            label => Some(Field::from_label(label).ok_or(QueryError::SortField)?),
        };
        let reverse = match reverse {
            "Да" => true,
            "Нет" | "" => false,
            _ => return Err(QueryError::SortOrder),
        };
        Ok(field.map(|field| Sort { field, reverse }))
    }

    fn compare(&self, a: &Vacancy, b: &Vacancy) -> Ordering {
        match self.field {
            // currencies are checked when the dataset is loaded
            Field::Salary => {
                let key = |v: &Vacancy| v.salary.rur_midpoint().unwrap_or(f64::MIN);
                key(a).total_cmp(&key(b))
            }
            Field::Experience => a.experience_rank().cmp(&b.experience_rank()),
            Field::KeySkills => a.key_skills.len().cmp(&b.key_skills.len()),
            f => text_of(a, f).cmp(text_of(b, f)),
        }
    }

    /// Stable in both directions: equal keys keep their input order.
    pub fn apply(&self, rows: &mut [&Vacancy]) {
        if self.reverse {
            rows.sort_by(|a, b| self.compare(b, a));
        } else {
            rows.sort_by(|a, b| self.compare(a, b));
        }
    }
}

/// Raw text of a field, as stored on the posting.
fn text_of(v: &Vacancy, field: Field) -> &str {
    match field {
        Field::Name => &v.name,
        Field::Description => &v.description,
        Field::Experience => &v.experience_id,
        Field::Premium => &v.premium,
        Field::Employer => &v.employer_name,
        Field::SalaryGross => &v.salary.gross,
        Field::SalaryCurrency => &v.salary.currency,
        Field::AreaName => &v.area_name,
        Field::PublishedAt => &v.published_at,
        Field::KeySkills | Field::Salary => "",
    }
}

/// 1-based row window, `end` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl Default for RowRange {
    fn default() -> Self {
        Self { start: 1, end: RANGE_END_DEFAULT }
    }
}

impl RowRange {
    /// "start [end]"; empty keeps the defaults.
    pub fn parse(input: &str) -> Result<RowRange, QueryError> {
        let mut parts = input.split_whitespace();
        let mut range = RowRange::default();
        if let Some(start) = parts.next() {
            range.start = start.parse().map_err(|_| QueryError::Range)?;
        }
        if let Some(end) = parts.next() {
            range.end = end.parse().map_err(|_| QueryError::Range)?;
        }
        if range.start == 0 {
            return Err(QueryError::Range);
        }
        Ok(range)
    }

    /// Zero-based slice bounds clamped to `len`.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let lo = (self.start - 1).min(len);
        let hi = self.end.saturating_sub(1).clamp(lo, len);
        (lo, hi)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    pub filter: Option<Filter>,
    pub sort: Option<Sort>,
    pub range: RowRange,
    /// Visible columns; `None` shows all.
    pub columns: Option<Vec<&'static str>>,
}

impl Query {
    pub fn parse(input: &QueryInput) -> Result<Query, QueryError> {
        Ok(Query {
            filter: Filter::parse(&input.filter)?,
            sort: Sort::parse(&input.sort, &input.reverse)?,
            range: RowRange::parse(&input.range)?,
            columns: parse_columns(&input.columns)?,
        })
    }

    /// Filtered then sorted postings.
    pub fn select<'a>(&self, all: &'a [Vacancy]) -> Vec<&'a Vacancy> {
        let mut rows: Vec<&Vacancy> = match &self.filter {
            Some(f) => all.iter().filter(|v| f.matches(v)).collect(),
            None => all.iter().collect(),
        };
        if let Some(sort) = &self.sort {
            sort.apply(&mut rows);
        }
        rows
    }

    /// Columns to print, in table order.
    pub fn visible_columns(&self) -> Vec<&'static str> {
        match &self.columns {
            Some(cols) => TABLE_COLUMNS.into_iter().filter(|c| cols.contains(c)).collect(),
            None => TABLE_COLUMNS.to_vec(),
        }
    }
}

/// "Название, Навыки" → those plus "№". Empty or a blank entry means all.
fn parse_columns(input: &str) -> Result<Option<Vec<&'static str>>, QueryError> {
    let names: Vec<&str> = input.split(", ").collect();
    if names.iter().any(|n| n.is_empty()) {
        return Ok(None);
    }
    let mut cols = vec![NUMBER_COLUMN];
    for name in names {
        let col = TABLE_COLUMNS
            .into_iter()
            .find(|c| *c == name)
            .ok_or_else(|| QueryError::Column(s!(name)))?;
        cols.push(col);
    }
    Ok(Some(cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::vacancy::Salary;

    fn vac(name: &str, skills: &str, exp: &str, from: i64, to: i64, cur: &str, date: &str) -> Vacancy {
        let salary = Salary { from, to, gross: s!("true"), currency: s!(cur) };
        Vacancy::new(name, "", skills, exp, "False", "Acme", salary, "Москва", date)
    }

    fn data() -> Vec<Vacancy> {
        vec![
            vac("A", "Rust\nSQL", "between1And3", 100, 200, "RUR", "2022-07-05T18:19:30+0300"),
            vac("B", "Rust", "moreThan6", 10, 20, "USD", "2022-07-06T10:00:00+0300"),
            vac("C", "SQL\nGit\nRust", "noExperience", 150, 150, "RUR", "2022-07-05T09:00:00+0300"),
            vac("D", "Git", "between1And3", 300, 400, "RUR", "2022-07-07T09:00:00+0300"),
        ]
    }

    fn names(rows: &[&Vacancy]) -> Vec<String> {
        rows.iter().map(|v| v.name.clone()).collect()
    }

    fn query(filter: &str, sort: &str, reverse: &str) -> Query {
        Query::parse(&QueryInput {
            filter: s!(filter),
            sort: s!(sort),
            reverse: s!(reverse),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn input_errors_in_order() {
        let bad = |f: &str, s: &str, r: &str| {
            Query::parse(&QueryInput { filter: s!(f), sort: s!(s), reverse: s!(r), ..Default::default() })
                .unwrap_err()
        };
        assert_eq!(bad("Название Z", "Зарплата", "x"), QueryError::FilterFormat);
        assert_eq!(bad("Зарплата: 5", "", ""), QueryError::FilterField);
        assert_eq!(bad("", "Зарплата", "x"), QueryError::SortField);
        assert_eq!(bad("", "Оклад", "Наверное"), QueryError::SortOrder);
        assert_eq!(bad("Оклад: много", "", ""), QueryError::FilterValue(s!("много")));
        assert_eq!(QueryError::FilterFormat.to_string(), "Формат ввода некорректен");
    }

    #[test]
    fn filters() {
        let all = data();
        assert_eq!(names(&query("Оклад: 150", "", "").select(&all)), ["A", "C"]);
        assert_eq!(names(&query("Навыки: Rust, SQL", "", "").select(&all)), ["A", "C"]);
        assert_eq!(names(&query("Опыт работы: От 1 года до 3 лет", "", "").select(&all)), ["A", "D"]);
        assert_eq!(names(&query("Идентификатор валюты оклада: Доллары", "", "").select(&all)), ["B"]);
        assert_eq!(names(&query("Дата публикации вакансии: 05.07.2022", "", "").select(&all)), ["A", "C"]);
        assert_eq!(names(&query("Название: D", "", "").select(&all)), ["D"]);
        assert_eq!(query("Премиум-вакансия: Да", "", "").select(&all).len(), 0);
        assert_eq!(query("Оклад указан до вычета налогов: Да", "", "").select(&all).len(), 4);
        assert!(query("Опыт работы: Вечность", "", "").select(&all).is_empty());
    }

    #[test]
    fn sorts_are_stable() {
        let all = data();
        assert_eq!(names(&query("", "Оклад", "").select(&all)), ["A", "C", "D", "B"]);
        assert_eq!(names(&query("", "Оклад", "Да").select(&all)), ["B", "D", "A", "C"]);
        assert_eq!(names(&query("", "Опыт работы", "").select(&all)), ["C", "A", "D", "B"]);
        assert_eq!(names(&query("", "Опыт работы", "Да").select(&all)), ["B", "A", "D", "C"]);
        assert_eq!(names(&query("", "Навыки", "Да").select(&all)), ["C", "A", "B", "D"]);
        assert_eq!(names(&query("", "Название", "Нет").select(&all)), ["A", "B", "C", "D"]);
    }

    #[test]
    fn ranges() {
        assert_eq!(RowRange::parse("").unwrap(), RowRange::default());
        assert_eq!(RowRange::parse("2").unwrap(), RowRange { start: 2, end: RANGE_END_DEFAULT });
        assert_eq!(RowRange::parse("2 4").unwrap().bounds(10), (1, 3));
        assert_eq!(RowRange::parse("5 9").unwrap().bounds(3), (3, 3));
        assert_eq!(RowRange::parse("3 1").unwrap().bounds(10), (2, 2));
        assert_eq!(RowRange::parse("a"), Err(QueryError::Range));
        assert_eq!(RowRange::parse("0 3"), Err(QueryError::Range));
    }

    #[test]
    fn columns() {
        assert_eq!(query("", "", "").visible_columns(), TABLE_COLUMNS.to_vec());
        let q = Query::parse(&QueryInput { columns: s!("Оклад, Название"), ..Default::default() }).unwrap();
        assert_eq!(q.visible_columns(), ["№", "Название", "Оклад"]);
        let err = Query::parse(&QueryInput { columns: s!("Город"), ..Default::default() }).unwrap_err();
        assert_eq!(err, QueryError::Column(s!("Город")));
    }
}
