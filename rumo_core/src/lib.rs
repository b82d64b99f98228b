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

//! Voice travel-command parser.
//!
//! Translates free-form Brazilian Portuguese phrases into structured
//! flight-search and fare-radar commands. The parser is a pure function of
//! the input text and an explicit anchor date: no clock reads, no I/O, no
//! state between calls. All failures are soft — unresolved fields come back
//! empty alongside a human-readable error list and a 0–100 confidence score,
//! and the caller decides whether to act on the result.

use chrono::NaiveDate;
use rumo_locale::{AliasTable, normalize};

pub mod command;
pub mod extract;

pub use command::{
    CabinClass, ERR_DEPARTURE_MISSING, ERR_DESTINATION_MISSING, ERR_NO_RADAR_CRITERIA,
    ERR_ORIGIN_MISSING, ERR_SAME_ROUTE, ParsedCommand, ParsedFlightCommand, ParsedRadarCommand,
    ThresholdKind,
};

/// Words that route a phrase to the radar assembler instead of the flight
/// assembler.
const RADAR_KEYWORDS: &[&str] = &[
    "radar",
    "alerta",
    "alertas",
    "monitorar",
    "monitore",
    "monitorando",
    "acompanhar",
    "acompanhe",
    "avise",
    "avisar",
    "aviso",
];

/// Entry point owning the immutable lookup tables.
///
/// Safe to share across threads: the alias table is read-only after
/// construction and every parse call is side-effect free.
#[derive(Debug, Clone)]
pub struct CommandParser {
    aliases: AliasTable,
}

impl CommandParser {
    /// Parser over the built-in alias table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            aliases: AliasTable::builtin(),
        }
    }

    /// Parser over a caller-assembled alias table (built-in plus config
    /// extras, typically).
    #[must_use]
    pub fn with_aliases(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// The table this parser resolves locations against.
    #[must_use]
    pub fn alias_table(&self) -> &AliasTable {
        &self.aliases
    }

    /// Parse a flight-search command out of `text`, anchored at `anchor`.
    #[must_use]
    pub fn parse_flight(&self, text: &str, anchor: NaiveDate) -> ParsedFlightCommand {
        command::flight::assemble(&self.aliases, text, anchor)
    }

    /// Parse a radar-monitor command out of `text`, anchored at `anchor`.
    #[must_use]
    pub fn parse_radar(&self, text: &str, anchor: NaiveDate) -> ParsedRadarCommand {
        command::radar::assemble(&self.aliases, text, anchor)
    }

    /// Classify the phrase and run the matching assembler.
    ///
    /// A radar keyword anywhere in the phrase selects the radar flow;
    /// everything else is treated as a flight search.
    #[must_use]
    pub fn interpret(&self, text: &str, anchor: NaiveDate) -> ParsedCommand {
        if is_radar_request(text) {
            ParsedCommand::Radar(self.parse_radar(text, anchor))
        } else {
            ParsedCommand::Flight(self.parse_flight(text, anchor))
        }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_radar_request(text: &str) -> bool {
    let normalized = normalize(text);
    normalized
        .split(' ')
        .any(|word| RADAR_KEYWORDS.contains(&word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
    }

    #[test]
    fn interpret_routes_radar_keywords_to_radar() {
        let parser = CommandParser::new();
        let parsed = parser.interpret(
            "criar alerta de são paulo para paris até dois mil reais",
            anchor(),
        );
        assert!(matches!(parsed, ParsedCommand::Radar(_)));
    }

    #[test]
    fn interpret_defaults_to_flight() {
        let parser = CommandParser::new();
        let parsed = parser.interpret("buscar voo de são paulo para rio de janeiro", anchor());
        assert!(matches!(parsed, ParsedCommand::Flight(_)));
    }

    #[test]
    fn radar_keyword_matches_whole_words_only() {
        // "alertado" is not the keyword "alerta".
        assert!(!is_radar_request("fui alertado do voo"));
        assert!(is_radar_request("monitore o preço"));
    }
}
