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

//! Airport alias table.
//!
//! Maps canonical IATA-like codes to the spoken names a traveler actually
//! says. Aliases are stored pre-normalized (lowercase, accent-free) and the
//! table keeps registration order: when two entries could both match, the
//! first-registered code wins.

use thiserror::Error;

use crate::text::normalize;

/// Built-in coverage: Brazilian majors plus the international destinations
/// the reference commands mention. Aliases are authored already normalized.
const BUILTIN: &[(&str, &[&str])] = &[
    ("GRU", &["sao paulo", "guarulhos", "sp"]),
    ("CGH", &["congonhas"]),
    ("GIG", &["rio de janeiro", "rio", "galeao"]),
    ("SDU", &["santos dumont"]),
    ("BSB", &["brasilia", "bsb"]),
    ("CNF", &["belo horizonte", "confins", "bh"]),
    ("SSA", &["salvador"]),
    ("REC", &["recife"]),
    ("FOR", &["fortaleza"]),
    ("POA", &["porto alegre"]),
    ("CWB", &["curitiba"]),
    ("FLN", &["florianopolis"]),
    ("MAO", &["manaus"]),
    ("BEL", &["belem"]),
    ("NAT", &["natal"]),
    ("MCZ", &["maceio"]),
    ("VIX", &["vitoria"]),
    ("GYN", &["goiania"]),
    ("CGB", &["cuiaba"]),
    ("CGR", &["campo grande"]),
    ("IGU", &["foz do iguacu", "foz"]),
    ("VCP", &["campinas", "viracopos"]),
    ("MIA", &["miami"]),
    ("MCO", &["orlando"]),
    ("JFK", &["nova york", "nova iorque", "new york"]),
    ("LAX", &["los angeles"]),
    ("YYZ", &["toronto"]),
    ("MEX", &["cidade do mexico"]),
    ("CUN", &["cancun"]),
    ("EZE", &["buenos aires"]),
    ("SCL", &["santiago", "santiago do chile"]),
    ("MVD", &["montevideu"]),
    ("BOG", &["bogota"]),
    ("LIM", &["lima"]),
    ("LIS", &["lisboa", "lisbon"]),
    ("OPO", &["porto"]),
    ("MAD", &["madri", "madrid"]),
    ("BCN", &["barcelona"]),
    ("CDG", &["paris"]),
    ("LHR", &["londres", "london"]),
    ("FCO", &["roma"]),
    ("MXP", &["milao"]),
    ("FRA", &["frankfurt"]),
    ("AMS", &["amsterda"]),
    ("DXB", &["dubai"]),
    ("HND", &["toquio"]),
];

/// Errors raised when extending the table with user-supplied aliases.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    /// The location code was empty after trimming.
    #[error("location code must not be empty")]
    EmptyCode,

    /// Every supplied alias normalized to the empty string.
    #[error("location {code} has no usable alias")]
    EmptyAliasSet {
        /// The code the caller tried to register.
        code: String,
    },
}

#[derive(Debug, Clone)]
struct AliasEntry {
    code: String,
    aliases: Vec<String>,
}

/// Ordered alias table, immutable once handed to the parser.
///
/// Resolution runs two passes over registration order: an exact pass, then
/// a partial pass where either side may contain the other as a substring.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Build the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(code, aliases)| AliasEntry {
                code: (*code).to_string(),
                aliases: aliases.iter().map(|a| normalize(a)).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Register extra aliases for a code, creating the entry when new.
    ///
    /// Aliases are normalized before storage; duplicates are ignored. An
    /// extension that leaves the code without a single usable alias is
    /// rejected, so the "every code has at least one alias" invariant holds.
    pub fn extend(&mut self, code: &str, aliases: &[String]) -> Result<(), LocaleError> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(LocaleError::EmptyCode);
        }

        let normalized: Vec<String> = aliases
            .iter()
            .map(|a| normalize(a))
            .filter(|a| !a.is_empty())
            .collect();
        if normalized.is_empty() {
            return Err(LocaleError::EmptyAliasSet { code });
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.code == code) {
            for alias in normalized {
                if !entry.aliases.contains(&alias) {
                    entry.aliases.push(alias);
                }
            }
        } else {
            self.entries.push(AliasEntry {
                code,
                aliases: normalized,
            });
        }
        Ok(())
    }

    /// Resolve a free-text phrase to a canonical code.
    ///
    /// Exact pass first over every alias in registration order, then the
    /// partial pass (phrase contains alias, or alias contains phrase).
    #[must_use]
    pub fn resolve(&self, phrase: &str) -> Option<&str> {
        let needle = normalize(phrase);
        if needle.is_empty() {
            return None;
        }

        for entry in &self.entries {
            if entry.aliases.iter().any(|a| *a == needle) {
                return Some(&entry.code);
            }
        }

        for entry in &self.entries {
            if entry
                .aliases
                .iter()
                .any(|a| needle.contains(a.as_str()) || a.contains(&needle))
            {
                return Some(&entry.code);
            }
        }

        None
    }

    /// Number of registered codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered codes, in registration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}
