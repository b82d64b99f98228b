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

//! Origin/destination extraction.
//!
//! An ordered list of named route templates is applied to the whole
//! sentence. Each template isolates an origin span and a destination span
//! bounded by connector words; the spans are then resolved through the
//! alias table. The first template whose spans BOTH resolve wins. A
//! template that matches text but fails to resolve yields to the next one,
//! and when no template succeeds both sides are reported as not found.

use once_cell::sync::Lazy;
use regex::Regex;
use rumo_locale::{AliasTable, normalize};
use tracing::debug;

/// Trailing clause that ends a destination span: a date, passenger, class
/// or threshold marker, or end of string.
const TRAIL: &str = r"(?: (?:hoje|amanha|depois|dia|no|na|em|com|para|pra|ate|a|voltando|retornando|retorno|ida|volta|classe|executiva|primeira|economica|por|saindo|partindo|\d+)\b.*)?$";

/// One named extraction rule, independently testable.
#[derive(Debug)]
pub struct RouteTemplate {
    /// Rule identifier, used only for tracing.
    pub name: &'static str,
    pattern: Regex,
}

impl RouteTemplate {
    fn compile(name: &'static str, body: &str) -> Option<Self> {
        let pattern = Regex::new(&format!("{body}{TRAIL}")).ok()?;
        Some(Self { name, pattern })
    }
}

static ROUTE_TEMPLATES: Lazy<Vec<RouteTemplate>> = Lazy::new(|| {
    [
        (
            "departing_to",
            r"\bsaindo de (?P<origin>.+?) (?:com destino a|chegando em|para|pra) (?P<dest>.+?)",
        ),
        (
            "from_to",
            r"\bde (?P<origin>.+?) (?:para|pra) (?P<dest>.+?)",
        ),
        (
            "origin_destination",
            r"\borigem (?P<origin>.+?) (?:e )?destino (?P<dest>.+?)",
        ),
    ]
    .into_iter()
    .filter_map(|(name, body)| RouteTemplate::compile(name, body))
    .collect()
});

/// Resolved endpoints of a route phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    /// Canonical origin code, when a template resolved one.
    pub origin: Option<String>,
    /// Canonical destination code, when a template resolved one.
    pub destination: Option<String>,
}

/// Extract an origin/destination pair from the whole sentence.
#[must_use]
pub fn extract_route(aliases: &AliasTable, text: &str) -> Route {
    let text = normalize(text);

    for template in ROUTE_TEMPLATES.iter() {
        let Some(caps) = template.pattern.captures(&text) else {
            continue;
        };
        let origin_span = caps.name("origin").map_or("", |m| m.as_str());
        let dest_span = caps.name("dest").map_or("", |m| m.as_str());

        match (aliases.resolve(origin_span), aliases.resolve(dest_span)) {
            (Some(origin), Some(destination)) => {
                debug!("route template '{}' matched", template.name);
                return Route {
                    origin: Some(origin.to_string()),
                    destination: Some(destination.to_string()),
                };
            }
            // Spans matched but did not resolve to known codes; the next
            // template gets its chance.
            _ => {
                debug!("route template '{}' matched but did not resolve", template.name);
            }
        }
    }

    Route::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AliasTable {
        AliasTable::builtin()
    }

    #[test]
    fn all_templates_compile() {
        assert_eq!(ROUTE_TEMPLATES.len(), 3);
    }

    #[test]
    fn from_to_with_trailing_date() {
        let route = extract_route(&table(), "buscar voo de são paulo para rio de janeiro amanhã");
        assert_eq!(route.origin.as_deref(), Some("GRU"));
        assert_eq!(route.destination.as_deref(), Some("GIG"));
    }

    #[test]
    fn from_to_ending_at_end_of_string() {
        let route = extract_route(&table(), "de brasília para miami");
        assert_eq!(route.origin.as_deref(), Some("BSB"));
        assert_eq!(route.destination.as_deref(), Some("MIA"));
    }

    #[test]
    fn destination_bounded_by_passenger_clause() {
        let route = extract_route(&table(), "quero viajar de brasília para miami hoje com 3 passageiros");
        assert_eq!(route.origin.as_deref(), Some("BSB"));
        assert_eq!(route.destination.as_deref(), Some("MIA"));
    }

    #[test]
    fn destination_bounded_by_threshold_clause() {
        let route = extract_route(&table(), "de são paulo para paris até dois mil reais");
        assert_eq!(route.origin.as_deref(), Some("GRU"));
        assert_eq!(route.destination.as_deref(), Some("CDG"));
    }

    #[test]
    fn departing_variant() {
        let route = extract_route(&table(), "saindo de recife com destino a lisboa");
        assert_eq!(route.origin.as_deref(), Some("REC"));
        assert_eq!(route.destination.as_deref(), Some("LIS"));
    }

    #[test]
    fn origin_destination_variant() {
        let route = extract_route(&table(), "origem porto alegre destino curitiba");
        assert_eq!(route.origin.as_deref(), Some("POA"));
        assert_eq!(route.destination.as_deref(), Some("CWB"));
    }

    #[test]
    fn multiword_cities_on_both_sides() {
        let route = extract_route(&table(), "de foz do iguaçu para buenos aires dia 10 de março");
        assert_eq!(route.origin.as_deref(), Some("IGU"));
        assert_eq!(route.destination.as_deref(), Some("EZE"));
    }

    #[test]
    fn same_city_both_sides_is_not_rejected_here() {
        let route = extract_route(&table(), "voo de lisboa para lisboa amanhã");
        assert_eq!(route.origin.as_deref(), Some("LIS"));
        assert_eq!(route.destination.as_deref(), Some("LIS"));
    }

    #[test]
    fn no_template_match_yields_nothing() {
        let route = extract_route(&table(), "quero viajar para algum lugar bonito");
        assert_eq!(route, Route::default());
    }

    #[test]
    fn unresolvable_spans_yield_nothing() {
        let route = extract_route(&table(), "de lugar nenhum para parte alguma");
        assert_eq!(route, Route::default());
    }
}
