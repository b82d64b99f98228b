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

//! Passenger-count extraction.
//!
//! Accepts 1–9 as a digit next to a passenger noun or after "para"/"com",
//! or as a spelled numeral adjacent to a passenger noun. One passenger is a
//! valid assumption, so the default raises no error.

use once_cell::sync::Lazy;
use regex::Regex;
use rumo_locale::{normalize, numeral_value};

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static DIGIT_BEFORE_NOUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([1-9]) ?(?:passageiros?|pessoas?|adultos?)\b")
        .expect("valid passenger-digit pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static PREPOSITION_DIGIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:para|com) ([1-9])\b").expect("valid preposition-digit pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static WORD_BEFORE_NOUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(um|uma|dois|duas|tres|quatro|cinco|seis|sete|oito|nove) (?:passageiros?|pessoas?)\b",
    )
    .expect("valid passenger-word pattern")
});

/// Extract the passenger count, defaulting to 1.
#[must_use]
pub fn extract_passengers(text: &str) -> u32 {
    let text = normalize(text);

    if let Some(n) = first_digit(&DIGIT_BEFORE_NOUN, &text) {
        return n;
    }
    if let Some(n) = first_digit(&PREPOSITION_DIGIT, &text) {
        return n;
    }
    if let Some(caps) = WORD_BEFORE_NOUN.captures(&text) {
        if let Some(word) = caps.get(1) {
            if let Some(value) = numeral_value(word.as_str()) {
                return u32::try_from(value).unwrap_or(1);
            }
        }
    }

    1
}

fn first_digit(pattern: &Regex, text: &str) -> Option<u32> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
