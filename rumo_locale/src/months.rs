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

//! Month-name table, zero-based like the reference data model.

use crate::text::normalize;

/// Month name to zero-based index, authored pre-normalized.
pub const MONTH_NAMES: &[(&str, u32)] = &[
    ("janeiro", 0),
    ("fevereiro", 1),
    ("marco", 2),
    ("abril", 3),
    ("maio", 4),
    ("junho", 5),
    ("julho", 6),
    ("agosto", 7),
    ("setembro", 8),
    ("outubro", 9),
    ("novembro", 10),
    ("dezembro", 11),
];

/// Look a month name up, case- and accent-insensitively.
#[must_use]
pub fn month_index(name: &str) -> Option<u32> {
    let needle = normalize(name);
    MONTH_NAMES
        .iter()
        .find(|(month, _)| *month == needle)
        .map(|(_, index)| *index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_based_indices() {
        assert_eq!(month_index("janeiro"), Some(0));
        assert_eq!(month_index("dezembro"), Some(11));
    }

    #[test]
    fn accent_insensitive() {
        assert_eq!(month_index("março"), Some(2));
        assert_eq!(month_index("MARÇO"), Some(2));
    }

    #[test]
    fn unknown_month_is_none() {
        assert_eq!(month_index("smarch"), None);
    }
}
