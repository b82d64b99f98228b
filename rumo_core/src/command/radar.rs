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

//! Radar-command assembly.
//!
//! A radar request monitors a route for fares below a threshold, optionally
//! inside a date window. The window-end marker shares the word "até" with
//! price thresholds, so the end-of-window search only accepts date-shaped
//! captures; "até 2000 reais" stays a threshold and "até 20 de dezembro"
//! stays a window end.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rumo_locale::{AliasTable, normalize};
use tracing::debug;

use super::{
    ERR_DESTINATION_MISSING, ERR_NO_RADAR_CRITERIA, ERR_ORIGIN_MISSING, ERR_SAME_ROUTE,
    ParsedRadarCommand, ThresholdKind, clamp_confidence,
};
use crate::extract::{extract_mileage, extract_price, extract_route, resolve_date};

/// Window-start markers, most specific first.
const WINDOW_START_MARKERS: &[&str] = &["a partir do dia", "a partir de", "comecando em", "desde"];

const PENALTY_MISSING_ENDPOINT: i32 = 40;
const PENALTY_NO_CRITERIA: i32 = 10;
const PENALTY_SAME_ROUTE: i32 = 50;

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static WINDOW_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bate (?:o dia )?(\d{1,2} de [a-z]+|\d{1,2}/\d{1,2}(?:/\d{2,4})?|\d{1,2}-\d{1,2}-\d{4}|hoje|amanha|depois de amanha|proxima semana|semana que vem)",
    )
    .expect("valid window-end pattern")
});

/// Assemble a radar-monitor command out of free text.
pub(crate) fn assemble(aliases: &AliasTable, text: &str, anchor: NaiveDate) -> ParsedRadarCommand {
    let text = normalize(text);

    let route = extract_route(aliases, &text);
    let threshold_kind = if text.contains("milha") {
        ThresholdKind::Miles
    } else {
        ThresholdKind::Currency
    };
    let threshold_value = match threshold_kind {
        ThresholdKind::Miles => extract_mileage(&text),
        ThresholdKind::Currency => extract_price(&text),
    };
    let window_start = resolve_window_start(&text, anchor);
    let window_end = resolve_window_end(&text, anchor);

    let mut errors = Vec::new();
    let mut confidence: i32 = 100;

    if route.origin.is_none() {
        confidence -= PENALTY_MISSING_ENDPOINT;
        errors.push(ERR_ORIGIN_MISSING.to_string());
    }
    if route.destination.is_none() {
        confidence -= PENALTY_MISSING_ENDPOINT;
        errors.push(ERR_DESTINATION_MISSING.to_string());
    }
    // Window and threshold are all optional; only their collective absence
    // is worth a small penalty.
    if window_start.is_none() && window_end.is_none() && threshold_value.is_none() {
        confidence -= PENALTY_NO_CRITERIA;
        errors.push(ERR_NO_RADAR_CRITERIA.to_string());
    }
    if let (Some(origin), Some(destination)) = (&route.origin, &route.destination) {
        if origin == destination {
            // Same scoring as the flight assembler: the duplicated
            // destination counts as missing on top of the route penalty.
            confidence -= PENALTY_MISSING_ENDPOINT + PENALTY_SAME_ROUTE;
            errors.push(ERR_SAME_ROUTE.to_string());
        }
    }

    let confidence = clamp_confidence(confidence);
    debug!("radar command assembled with confidence {confidence}");

    ParsedRadarCommand {
        origin: route.origin.unwrap_or_default(),
        destination: route.destination.unwrap_or_default(),
        window_start: window_start.map(|d| d.format("%Y-%m-%d").to_string()),
        window_end: window_end.map(|d| d.format("%Y-%m-%d").to_string()),
        threshold_value,
        threshold_kind,
        confidence,
        errors,
    }
}

/// Search for a window start behind a dedicated marker.
fn resolve_window_start(text: &str, anchor: NaiveDate) -> Option<NaiveDate> {
    for marker in WINDOW_START_MARKERS {
        if let Some(pos) = text.find(marker) {
            return resolve_date(&text[pos + marker.len()..], anchor);
        }
    }
    None
}

/// Search for a window end: "até" followed by a date-shaped capture only.
fn resolve_window_end(text: &str, anchor: NaiveDate) -> Option<NaiveDate> {
    for caps in WINDOW_END.captures_iter(text) {
        if let Some(candidate) = caps.get(1) {
            if let Some(date) = resolve_date(candidate.as_str(), anchor) {
                return Some(date);
            }
        }
    }
    None
}
