// src/core/currency.rs
//
// Fixed conversion table: multiply a salary in `code` by its rate to get RUR.

use crate::error::{Result, StatsError};

/// Reference currency every salary is converted into.
pub const REFERENCE: &str = "RUR";

/// (code, rate to RUR, display name)
static RATES: &[(&str, f64, &str)] = &[
    ("AZN", 35.68,  "Манаты"),
    ("BYR", 23.91,  "Белорусские рубли"),
    ("EUR", 59.90,  "Евро"),
    ("GEL", 21.74,  "Грузинский лари"),
    ("KGS", 0.76,   "Киргизский сом"),
    ("KZT", 0.13,   "Тенге"),
    ("RUR", 1.0,    "Рубли"),
    ("UAH", 1.64,   "Гривны"),
    ("USD", 60.66,  "Доллары"),
    ("UZS", 0.0055, "Узбекский сум"),
];

pub struct CurrencyTable;

impl CurrencyTable {
    /// Rate of `code` to the reference currency.
    pub fn rate(code: &str) -> Result<f64> {
        RATES
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|&(_, rate, _)| rate)
            .ok_or_else(|| StatsError::UnknownCurrency(s!(code)))
    }

    /// Russian display name of `code`, if known.
    pub fn display_name(code: &str) -> Option<&'static str> {
        RATES.iter().find(|(c, _, _)| *c == code).map(|&(_, _, name)| name)
    }

    /// Reverse of `display_name`.
    pub fn code_for_name(name: &str) -> Option<&'static str> {
        RATES.iter().find(|(_, _, n)| *n == name).map(|&(code, _, _)| code)
    }

    pub fn codes() -> impl Iterator<Item = &'static str> {
        RATES.iter().map(|&(code, _, _)| code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_documented_rate() {
        let expected = [
            ("KZT", 0.13), ("RUR", 1.0), ("UAH", 1.64), ("USD", 60.66), ("UZS", 0.0055),
            ("AZN", 35.68), ("BYR", 23.91), ("EUR", 59.90), ("GEL", 21.74), ("KGS", 0.76),
        ];
        for (code, rate) in expected {
            assert_eq!(CurrencyTable::rate(code).unwrap(), rate, "{code}");
        }
        assert_eq!(CurrencyTable::codes().count(), expected.len());
    }

    #[test]
    fn unknown_code_is_an_error() {
        for code in ["XYZ", "", "rur", "RUB"] {
            match CurrencyTable::rate(code) {
                Err(StatsError::UnknownCurrency(c)) => assert_eq!(c, code),
                other => panic!("expected UnknownCurrency for {code:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(CurrencyTable::display_name("KZT"), Some("Тенге"));
        assert_eq!(CurrencyTable::code_for_name("Евро"), Some("EUR"));
        assert_eq!(CurrencyTable::code_for_name("Фунты"), None);
    }
}
