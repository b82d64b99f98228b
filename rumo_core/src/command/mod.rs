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

//! Command assembly.
//!
//! Composes the extraction stages into one of two result records. Assembly
//! is a pure function of (text, anchor date): every unresolved field comes
//! back empty or absent with a matching entry in `errors`, and a 0–100
//! confidence score tells the caller how complete the extraction was.
//! Nothing in this module panics or returns early.

use serde::{Deserialize, Serialize};

pub mod flight;
pub mod radar;

/// Error entry when no origin was resolved.
pub const ERR_ORIGIN_MISSING: &str = "origin not identified";
/// Error entry when no destination was resolved.
pub const ERR_DESTINATION_MISSING: &str = "destination not identified";
/// Error entry when no departure date was resolved.
pub const ERR_DEPARTURE_MISSING: &str = "departure date not identified";
/// Error entry when origin and destination resolved to the same code.
pub const ERR_SAME_ROUTE: &str = "origin and destination are the same";
/// Error entry when a radar request carries no window and no threshold.
pub const ERR_NO_RADAR_CRITERIA: &str = "no monitoring window or threshold identified";

/// Cabin of service for a flight search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    /// The default when no class keyword occurs.
    #[default]
    Economy,
    Business,
    First,
}

impl std::fmt::Display for CabinClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Economy => write!(f, "economy"),
            Self::Business => write!(f, "business"),
            Self::First => write!(f, "first"),
        }
    }
}

/// Denomination of a radar threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdKind {
    /// Price in the local currency (the default).
    #[default]
    Currency,
    /// Frequent-flyer miles.
    Miles,
}

impl std::fmt::Display for ThresholdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Currency => write!(f, "currency"),
            Self::Miles => write!(f, "miles"),
        }
    }
}

/// Structured flight-search command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFlightCommand {
    /// Canonical origin code, empty when unresolved.
    pub origin: String,
    /// Canonical destination code, empty when unresolved.
    pub destination: String,
    /// ISO `YYYY-MM-DD` departure date, empty when unresolved.
    pub departure_date: String,
    /// ISO return date, present only for round trips with a resolvable date.
    pub return_date: Option<String>,
    /// Passenger count, at least 1.
    pub passengers: u32,
    /// Cabin of service.
    pub cabin_class: CabinClass,
    /// 0–100 completeness score.
    pub confidence: u8,
    /// Human-readable soft errors, in the order they were detected.
    pub errors: Vec<String>,
}

impl ParsedFlightCommand {
    /// The reference UI gate: confident enough, and all three required
    /// fields present.
    #[must_use]
    pub fn is_actionable(&self, min_confidence: u8) -> bool {
        self.confidence >= min_confidence
            && !self.origin.is_empty()
            && !self.destination.is_empty()
            && !self.departure_date.is_empty()
    }
}

/// Structured radar-monitor command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRadarCommand {
    /// Canonical origin code, empty when unresolved.
    pub origin: String,
    /// Canonical destination code, empty when unresolved.
    pub destination: String,
    /// ISO start of the monitoring window, when one was given.
    pub window_start: Option<String>,
    /// ISO end of the monitoring window, when one was given.
    pub window_end: Option<String>,
    /// Alert threshold, when one was given.
    pub threshold_value: Option<f64>,
    /// Denomination of the threshold.
    pub threshold_kind: ThresholdKind,
    /// 0–100 completeness score.
    pub confidence: u8,
    /// Human-readable soft errors, in the order they were detected.
    pub errors: Vec<String>,
}

impl ParsedRadarCommand {
    /// Whether both endpoints resolved.
    #[must_use]
    pub fn has_route(&self) -> bool {
        !self.origin.is_empty() && !self.destination.is_empty()
    }
}

/// Either parse result, as picked by keyword dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum ParsedCommand {
    /// Flight-search request.
    Flight(ParsedFlightCommand),
    /// Radar-monitor request.
    Radar(ParsedRadarCommand),
}

/// Clamp a penalty-adjusted score into the 0–100 band.
pub(crate) fn clamp_confidence(score: i32) -> u8 {
    u8::try_from(score.clamp(0, 100)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(clamp_confidence(-30), 0);
        assert_eq!(clamp_confidence(0), 0);
        assert_eq!(clamp_confidence(55), 55);
        assert_eq!(clamp_confidence(170), 100);
    }

    #[test]
    fn flight_command_serializes_camel_case() {
        let command = ParsedFlightCommand {
            origin: "GRU".to_string(),
            destination: "GIG".to_string(),
            departure_date: "2024-01-02".to_string(),
            return_date: None,
            passengers: 1,
            cabin_class: CabinClass::Economy,
            confidence: 100,
            errors: Vec::new(),
        };
        let json = serde_json::to_value(&command).unwrap_or_default();
        assert_eq!(json["departureDate"], "2024-01-02");
        assert_eq!(json["cabinClass"], "economy");
        assert!(json["returnDate"].is_null());
    }

    #[test]
    fn radar_command_serializes_camel_case() {
        let command = ParsedRadarCommand {
            origin: "GRU".to_string(),
            destination: "CDG".to_string(),
            window_start: None,
            window_end: None,
            threshold_value: Some(2000.0),
            threshold_kind: ThresholdKind::Currency,
            confidence: 100,
            errors: Vec::new(),
        };
        let json = serde_json::to_value(&command).unwrap_or_default();
        assert_eq!(json["thresholdValue"], 2000.0);
        assert_eq!(json["thresholdKind"], "currency");
        assert!(json["windowStart"].is_null());
    }

    #[test]
    fn actionable_gate_requires_fields_and_confidence() {
        let mut command = ParsedFlightCommand {
            origin: "GRU".to_string(),
            destination: "GIG".to_string(),
            departure_date: "2024-01-02".to_string(),
            return_date: None,
            passengers: 1,
            cabin_class: CabinClass::Economy,
            confidence: 100,
            errors: Vec::new(),
        };
        assert!(command.is_actionable(50));

        command.confidence = 40;
        assert!(!command.is_actionable(50));

        command.confidence = 80;
        command.departure_date = String::new();
        assert!(!command.is_actionable(50));
    }
}
