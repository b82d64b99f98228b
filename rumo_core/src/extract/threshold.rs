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

//! Price and mileage threshold extraction.
//!
//! Spoken thresholds mix numerals and spelled numbers non-uniformly ("até 2
//! mil reais", "até dois mil reais", "até cem reais"), so each extractor
//! runs a tier cascade: "mil"-qualified numerics, "mil"-qualified words,
//! bare spelled phrases through the numeral table, then plain numerics.
//! Word lookup runs before numeric parsing so "mil" is never read as a
//! literal number. A result must be positive and finite or the tier yields
//! nothing.

use once_cell::sync::Lazy;
use regex::Regex;
use rumo_locale::{month_index, normalize, numeral_value};
use tracing::debug;

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static PRICE_NUMERIC_MIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bate (?:uns |umas )?(\d+(?:[.,]\d+)?) mil\b").expect("valid price pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static PRICE_WORD_MIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bate (?:uns |umas )?([a-z]+) mil\b").expect("valid price pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static PRICE_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bate (?:uns |umas )?([a-z]+(?: [a-z]+)?)\b").expect("valid price pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static PRICE_CURRENCY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d+(?:[.,]\d+)?) ?(?:reais|r\$)|r\$ ?(\d+(?:[.,]\d+)?)\b")
        .expect("valid currency pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static PRICE_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bate (\d+(?:[.,]\d+)?)\b").expect("valid bare price pattern"));

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static MILES_NUMERIC_MIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:ate |por )?(\d+(?:[.,]\d+)?) mil milhas\b").expect("valid miles pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static MILES_WORD_MIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:ate |por )?([a-z]+) mil milhas\b").expect("valid miles pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static MILES_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:ate |por )?([a-z]+(?: [a-z]+)?) milhas\b").expect("valid miles pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static MILES_NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d+(?:[.,]\d+)?) ?milhas\b").expect("valid miles pattern")
});

/// Extract a currency threshold ("até dois mil reais" → 2000).
#[must_use]
pub fn extract_price(text: &str) -> Option<f64> {
    let text = normalize(text);

    // "até 2 mil [reais]"
    if let Some(n) = captured_number(&PRICE_NUMERIC_MIL, &text) {
        debug!("price tier: numeric mil");
        return positive(n * 1000.0);
    }

    // "até dois mil [reais]"
    if let Some(caps) = PRICE_WORD_MIL.captures(&text) {
        if let Some(value) = caps.get(1).and_then(|m| numeral_value(m.as_str())) {
            if value < 1000 {
                debug!("price tier: word mil");
                return positive(to_f64(value) * 1000.0);
            }
        }
    }

    // "até cem [reais]", "até mil" — whole phrase through the numeral table.
    if let Some(value) = captured_numeral(&PRICE_WORD, &text) {
        debug!("price tier: spelled phrase");
        return positive(to_f64(value));
    }

    // "1500 reais", "r$ 1500"
    if let Some(caps) = PRICE_CURRENCY.captures(&text) {
        let m = caps.get(1).or_else(|| caps.get(2))?;
        debug!("price tier: plain numeric with currency");
        return positive(parse_number(m.as_str())?);
    }

    // "até 1500" with nothing after it that reads as a date.
    if let Some(caps) = PRICE_BARE.captures(&text) {
        let m = caps.get(1)?;
        if !date_shaped_continuation(&text[m.end()..]) {
            debug!("price tier: bare numeric after marker");
            return positive(parse_number(m.as_str())?);
        }
    }

    None
}

/// Extract a mileage threshold ("até 20 mil milhas" → 20000).
#[must_use]
pub fn extract_mileage(text: &str) -> Option<f64> {
    let text = normalize(text);

    // "até 20 mil milhas": a bare number qualified by "mil milhas" is
    // multiplied out.
    if let Some(n) = captured_number(&MILES_NUMERIC_MIL, &text) {
        debug!("miles tier: numeric mil");
        return positive(n * 1000.0);
    }

    // "até vinte mil milhas"
    if let Some(caps) = MILES_WORD_MIL.captures(&text) {
        if let Some(value) = caps.get(1).and_then(|m| numeral_value(m.as_str())) {
            if value < 1000 {
                debug!("miles tier: word mil");
                return positive(to_f64(value) * 1000.0);
            }
        }
    }

    // "até dez mil milhas", "quinhentas milhas" — phrase lookup.
    if let Some(value) = captured_numeral(&MILES_WORD, &text) {
        debug!("miles tier: spelled phrase");
        return positive(to_f64(value));
    }

    // "50000 milhas"
    if let Some(n) = captured_number(&MILES_NUMERIC, &text) {
        debug!("miles tier: plain numeric");
        return positive(n);
    }

    // "milhas ... até 30000"
    if let Some(caps) = PRICE_BARE.captures(&text) {
        let m = caps.get(1)?;
        if !date_shaped_continuation(&text[m.end()..]) {
            debug!("miles tier: bare numeric after marker");
            return positive(parse_number(m.as_str())?);
        }
    }

    None
}

fn captured_number(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_number(m.as_str()))
}

/// Try the full two-word capture against the numeral table, then its first
/// word alone ("mil reais" fails as a phrase but "mil" resolves).
fn captured_numeral(pattern: &Regex, text: &str) -> Option<i64> {
    let caps = pattern.captures(text)?;
    let phrase = caps.get(1)?.as_str();

    numeral_value(phrase).or_else(|| {
        let first = phrase.split(' ').next()?;
        numeral_value(first)
    })
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok()
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "table values are far below 2^52"
)]
fn to_f64(value: i64) -> f64 {
    value as f64
}

/// Whether the text right after a captured number reads as a date rather
/// than a price ("até 15 de março", "até 15/03").
fn date_shaped_continuation(rest: &str) -> bool {
    if rest.starts_with('/') || rest.starts_with('-') {
        return true;
    }
    rest.strip_prefix(" de ")
        .and_then(|r| r.split(' ').next())
        .is_some_and(|word| month_index(word).is_some())
}
