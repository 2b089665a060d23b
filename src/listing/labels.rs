// src/listing/labels.rs
//
// Fixed Russian label tables for the listing mode and the stats captions.

/// Posting fields a user can filter or sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    KeySkills,
    Experience,
    Premium,
    Employer,
    Salary,
    SalaryGross,
    SalaryCurrency,
    AreaName,
    PublishedAt,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Description,
        Field::KeySkills,
        Field::Experience,
        Field::Premium,
        Field::Employer,
        Field::Salary,
        Field::SalaryGross,
        Field::SalaryCurrency,
        Field::AreaName,
        Field::PublishedAt,
    ];

    /// Dataset column name.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::KeySkills => "key_skills",
            Field::Experience => "experience_id",
            Field::Premium => "premium",
            Field::Employer => "employer_name",
            Field::Salary => "salary",
            Field::SalaryGross => "salary_gross",
            Field::SalaryCurrency => "salary_currency",
            Field::AreaName => "area_name",
            Field::PublishedAt => "published_at",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Название",
            Field::Description => "Описание",
            Field::KeySkills => "Навыки",
            Field::Experience => "Опыт работы",
            Field::Premium => "Премиум-вакансия",
            Field::Employer => "Компания",
            Field::Salary => "Оклад",
            Field::SalaryGross => "Оклад указан до вычета налогов",
            Field::SalaryCurrency => "Идентификатор валюты оклада",
            Field::AreaName => "Название региона",
            Field::PublishedAt => "Дата публикации вакансии",
        }
    }

    pub fn from_label(label: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.label() == label)
    }
}

/// Row-number column of the listing table.
pub const NUMBER_COLUMN: &str = "№";

/// Listing table columns, in display order.
pub const TABLE_COLUMNS: [&str; 10] = [
    NUMBER_COLUMN,
    "Название",
    "Описание",
    "Навыки",
    "Опыт работы",
    "Премиум-вакансия",
    "Компания",
    "Оклад",
    "Название региона",
    "Дата публикации вакансии",
];

/// (id, label, rank)
static EXPERIENCE: &[(&str, &str, u8)] = &[
    ("noExperience", "Нет опыта", 0),
    ("between1And3", "От 1 года до 3 лет", 1),
    ("between3And6", "От 3 до 6 лет", 2),
    ("moreThan6", "Более 6 лет", 3),
];

pub fn experience_label(id: &str) -> Option<&'static str> {
    EXPERIENCE.iter().find(|(i, _, _)| *i == id).map(|&(_, l, _)| l)
}

pub fn experience_id(label: &str) -> Option<&'static str> {
    EXPERIENCE.iter().find(|(_, l, _)| *l == label).map(|&(i, _, _)| i)
}

/// Unknown ids sort after every known one.
pub fn experience_rank(id: &str) -> u8 {
    EXPERIENCE.iter().find(|(i, _, _)| *i == id).map_or(u8::MAX, |&(_, _, r)| r)
}

/// "true"/"True"/"TRUE" → "Да", false-ish → "Нет", anything else unchanged.
pub fn yes_no(flag: &str) -> String {
    match flag.to_lowercase().as_str() {
        "true" => s!("Да"),
        "false" => s!("Нет"),
        _ => s!(flag),
    }
}

pub fn gross_label(flag: &str) -> &'static str {
    if flag.eq_ignore_ascii_case("true") { "Без вычета налогов" } else { "С вычетом налогов" }
}

/* ---------------- Statistics captions ---------------- */

pub const SALARY_BY_YEAR: &str = "Динамика уровня зарплат по годам";
pub const COUNT_BY_YEAR: &str = "Динамика количества вакансий по годам";
pub const SALARY_BY_YEAR_PROF: &str = "Динамика уровня зарплат по годам для выбранной профессии";
pub const COUNT_BY_YEAR_PROF: &str = "Динамика количества вакансий по годам для выбранной профессии";
pub const SALARY_BY_REGION: &str = "Уровень зарплат по городам (в порядке убывания)";
pub const SHARE_BY_REGION: &str = "Доля вакансий по городам (в порядке убывания)";

pub const YEAR: &str = "Год";
pub const AVG_SALARY: &str = "Средняя зарплата";
pub const VACANCY_COUNT: &str = "Количество вакансий";
pub const REGION: &str = "Город";
pub const SALARY_LEVEL: &str = "Уровень зарплат";
pub const VACANCY_SHARE: &str = "Доля вакансий";
pub const OTHER_REGIONS: &str = "Другие";

/// "Средняя зарплата - Программист"
pub fn for_profession(caption: &str, profession: &str) -> String {
    join!(caption, " - ", profession)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for f in Field::ALL {
            assert_eq!(Field::from_label(f.label()), Some(f));
        }
        assert_eq!(Field::from_label("Зарплата"), None);
    }

    #[test]
    fn experience_tables() {
        assert_eq!(experience_label("between1And3"), Some("От 1 года до 3 лет"));
        assert_eq!(experience_id("Более 6 лет"), Some("moreThan6"));
        assert!(experience_rank("noExperience") < experience_rank("moreThan6"));
        assert_eq!(experience_rank("???"), u8::MAX);
    }

    #[test]
    fn flags() {
        assert_eq!(yes_no("True"), "Да");
        assert_eq!(yes_no("FALSE"), "Нет");
        assert_eq!(gross_label("true"), "Без вычета налогов");
        assert_eq!(gross_label("False"), "С вычетом налогов");
    }
}
