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

//! Text normalization applied before any table lookup or pattern match.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a phrase for matching: lowercase, strip diacritics, trim and
/// collapse internal whitespace.
///
/// Every extraction stage normalizes its own input, so the stages stay
/// independently composable ("São Paulo", "sao paulo" and "SÃO  PAULO" all
/// compare equal after this).
#[must_use]
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();

    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("São Paulo"), "sao paulo");
        assert_eq!(normalize("amanhã"), "amanha");
        assert_eq!(normalize("Brasília"), "brasilia");
        assert_eq!(normalize("março"), "marco");
    }

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  MIAMI  "), "miami");
        assert_eq!(normalize("SÃO PAULO"), "sao paulo");
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(normalize("rio  de   janeiro"), "rio de janeiro");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn cedilla_becomes_plain_c() {
        assert_eq!(normalize("preço"), "preco");
    }
}
