// src/listing/vacancy.rs
//
// One posting as shown in the listing table.

use crate::core::currency::CurrencyTable;
use crate::core::sanitize::{clean_html, line_trim};
use crate::error::Result;
use super::labels::{experience_label, experience_rank, gross_label, yes_no};

#[derive(Clone, Debug, PartialEq)]
pub struct Salary {
    pub from: i64,
    pub to: i64,
    /// Raw "true"/"false" flag from the dataset.
    pub gross: String,
    pub currency: String,
}

impl Salary {
    /// "100 - 2 000 (Рубли) (Без вычета налогов)"
    pub fn to_display(&self) -> String {
        let currency = CurrencyTable::display_name(&self.currency).unwrap_or(&self.currency);
        format!(
            "{} - {} ({}) ({})",
            group_thousands(self.from),
            group_thousands(self.to),
            currency,
            gross_label(&self.gross)
        )
    }

    /// Midpoint of the fork in RUR, floored.
    pub fn rur_midpoint(&self) -> Result<f64> {
        let rate = CurrencyTable::rate(&self.currency)?;
        Ok((((self.from as f64) * rate + (self.to as f64) * rate) / 2.0).floor())
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.from as f64) <= v && v <= (self.to as f64)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vacancy {
    pub name: String,
    /// Tags stripped, whitespace collapsed.
    pub description: String,
    pub key_skills: Vec<String>,
    pub experience_id: String,
    pub premium: String,
    pub employer_name: String,
    pub salary: Salary,
    pub area_name: String,
    pub published_at: String,
}

impl Vacancy {
    /// `key_skills` is the dataset's newline-separated list.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        description: &str,
        key_skills: &str,
        experience_id: &str,
        premium: &str,
        employer_name: &str,
        salary: Salary,
        area_name: &str,
        published_at: &str,
    ) -> Self {
        Self {
            name: s!(name),
            description: clean_html(description),
            key_skills: key_skills.split('\n').map(String::from).collect(),
            experience_id: s!(experience_id),
            premium: s!(premium),
            employer_name: s!(employer_name),
            salary,
            area_name: s!(area_name),
            published_at: s!(published_at),
        }
    }

    /// "2007-12-03T17:40:09+0300" → "03.12.2007". Unexpected shapes come back as-is.
    pub fn date_display(&self) -> String {
        let day = self.published_at.split('T').next().unwrap_or_default();
        let parts: Vec<&str> = day.split('-').collect();
        match parts.as_slice() {
            [y, m, d, ..] => format!("{d}.{m}.{y}"),
            _ => s!(&self.published_at),
        }
    }

    pub fn premium_display(&self) -> String {
        yes_no(&self.premium)
    }

    pub fn experience_display(&self) -> String {
        experience_label(&self.experience_id).map_or_else(|| s!(&self.experience_id), String::from)
    }

    pub fn experience_rank(&self) -> u8 {
        experience_rank(&self.experience_id)
    }

    pub fn skills_display(&self) -> String {
        line_trim(&self.key_skills.join("\n"))
    }

    /// Table cells, without the row number.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            clean_html(&self.name),
            line_trim(&self.description),
            self.skills_display(),
            self.experience_display(),
            self.premium_display(),
            s!(&self.employer_name),
            self.salary.to_display(),
            s!(&self.area_name),
            self.date_display(),
        ]
    }
}

/// 2000000 → "2 000 000"
pub fn group_thousands(v: i64) -> String {
    let digits = v.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if v < 0 { out.push('-'); }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(' '); }
        out.push(ch);
    }
    out
}
