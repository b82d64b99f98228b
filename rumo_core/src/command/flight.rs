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

//! Flight-command assembly.

use chrono::NaiveDate;
use rumo_locale::{AliasTable, normalize};
use tracing::debug;

use super::{
    ERR_DEPARTURE_MISSING, ERR_DESTINATION_MISSING, ERR_ORIGIN_MISSING, ERR_SAME_ROUTE,
    ParsedFlightCommand, clamp_confidence,
};
use crate::extract::{extract_cabin, extract_passengers, extract_route, resolve_date};

/// Round-trip markers, most specific first. The return-date search starts
/// right after the first marker found, never before it.
const ROUND_TRIP_MARKERS: &[&str] = &["voltando", "retornando", "com retorno", "ida e volta", "volta"];

const PENALTY_MISSING_ENDPOINT: i32 = 40;
const PENALTY_MISSING_DATE: i32 = 20;
const PENALTY_SAME_ROUTE: i32 = 50;

/// Assemble a flight-search command out of free text.
pub(crate) fn assemble(aliases: &AliasTable, text: &str, anchor: NaiveDate) -> ParsedFlightCommand {
    let text = normalize(text);

    let route = extract_route(aliases, &text);
    let departure = resolve_date(&text, anchor);
    let return_date = resolve_return_date(&text, anchor);
    let passengers = extract_passengers(&text);
    let cabin_class = extract_cabin(&text);

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
    if departure.is_none() {
        confidence -= PENALTY_MISSING_DATE;
        errors.push(ERR_DEPARTURE_MISSING.to_string());
    }
    if let (Some(origin), Some(destination)) = (&route.origin, &route.destination) {
        if origin == destination {
            // A duplicated destination carries no routing information, so it
            // scores as missing on top of the same-route penalty.
            confidence -= PENALTY_MISSING_ENDPOINT + PENALTY_SAME_ROUTE;
            errors.push(ERR_SAME_ROUTE.to_string());
        }
    }

    let confidence = clamp_confidence(confidence);
    debug!("flight command assembled with confidence {confidence}");

    ParsedFlightCommand {
        origin: route.origin.unwrap_or_default(),
        destination: route.destination.unwrap_or_default(),
        departure_date: departure.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
        return_date: return_date.map(|d| d.format("%Y-%m-%d").to_string()),
        passengers,
        cabin_class,
        confidence,
        errors,
    }
}

/// Search for a return date, only behind a round-trip marker.
fn resolve_return_date(text: &str, anchor: NaiveDate) -> Option<NaiveDate> {
    for marker in ROUND_TRIP_MARKERS {
        if let Some(pos) = text.find(marker) {
            return resolve_date(&text[pos + marker.len()..], anchor);
        }
    }
    None
}
