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

//! Cabin-class extraction. Always succeeds; economy is the default.

use rumo_locale::normalize;

use crate::command::CabinClass;

const FIRST_KEYWORDS: &[&str] = &["primeira classe", "first class"];
const BUSINESS_KEYWORDS: &[&str] = &["classe executiva", "executiva", "business"];

/// Extract the cabin class from keyword synonyms.
#[must_use]
pub fn extract_cabin(text: &str) -> CabinClass {
    let text = normalize(text);

    if FIRST_KEYWORDS.iter().any(|k| text.contains(k)) {
        return CabinClass::First;
    }
    if BUSINESS_KEYWORDS.iter().any(|k| text.contains(k)) {
        return CabinClass::Business;
    }
    CabinClass::Economy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_synonyms() {
        assert_eq!(extract_cabin("voo na classe executiva"), CabinClass::Business);
        assert_eq!(extract_cabin("executiva"), CabinClass::Business);
        assert_eq!(extract_cabin("business"), CabinClass::Business);
    }

    #[test]
    fn first_class_synonyms() {
        assert_eq!(extract_cabin("primeira classe"), CabinClass::First);
        assert_eq!(extract_cabin("PRIMEIRA CLASSE"), CabinClass::First);
    }

    #[test]
    fn defaults_to_economy() {
        assert_eq!(extract_cabin("de são paulo para miami"), CabinClass::Economy);
        assert_eq!(extract_cabin(""), CabinClass::Economy);
    }
}
