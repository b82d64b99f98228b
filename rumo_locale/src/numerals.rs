#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Spelled-number table.
//!
//! Covers the closed set the voice commands use: units, round tens and
//! hundreds, and the compound "mil" forms ("dois mil" is one phrase with
//! value 2000, not an arithmetic expression).

use crate::text::normalize;

/// Word/phrase to value, authored pre-normalized.
pub const NUMERAL_WORDS: &[(&str, i64)] = &[
    ("um", 1),
    ("uma", 1),
    ("dois", 2),
    ("duas", 2),
    ("tres", 3),
    ("quatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("sete", 7),
    ("oito", 8),
    ("nove", 9),
    ("dez", 10),
    ("quinze", 15),
    ("vinte", 20),
    ("trinta", 30),
    ("quarenta", 40),
    ("cinquenta", 50),
    ("sessenta", 60),
    ("setenta", 70),
    ("oitenta", 80),
    ("noventa", 90),
    ("cem", 100),
    ("duzentos", 200),
    ("trezentos", 300),
    ("quatrocentos", 400),
    ("quinhentos", 500),
    ("seiscentos", 600),
    ("setecentos", 700),
    ("oitocentos", 800),
    ("novecentos", 900),
    ("mil", 1000),
    ("dois mil", 2000),
    ("tres mil", 3000),
    ("quatro mil", 4000),
    ("cinco mil", 5000),
    ("seis mil", 6000),
    ("sete mil", 7000),
    ("oito mil", 8000),
    ("nove mil", 9000),
    ("dez mil", 10_000),
    ("vinte mil", 20_000),
    ("trinta mil", 30_000),
    ("cinquenta mil", 50_000),
    ("cem mil", 100_000),
];

/// Look a spelled number up, case- and accent-insensitively.
#[must_use]
pub fn numeral_value(phrase: &str) -> Option<i64> {
    let needle = normalize(phrase);
    NUMERAL_WORDS
        .iter()
        .find(|(word, _)| *word == needle)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units() {
        assert_eq!(numeral_value("um"), Some(1));
        assert_eq!(numeral_value("três"), Some(3));
        assert_eq!(numeral_value("nove"), Some(9));
    }

    #[test]
    fn hundreds_and_thousands() {
        assert_eq!(numeral_value("cem"), Some(100));
        assert_eq!(numeral_value("quinhentos"), Some(500));
        assert_eq!(numeral_value("mil"), Some(1000));
    }

    #[test]
    fn compound_mil_phrases() {
        assert_eq!(numeral_value("dois mil"), Some(2000));
        assert_eq!(numeral_value("DOIS MIL"), Some(2000));
        assert_eq!(numeral_value("dez mil"), Some(10_000));
    }

    #[test]
    fn unknown_word_is_none() {
        assert_eq!(numeral_value("zilhao"), None);
        assert_eq!(numeral_value(""), None);
    }
}
