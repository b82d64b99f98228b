use rumo_config::Config;
use rumo_core::ParsedFlightCommand;
use tracing::info;

use super::{ParseInput, anchor_date, build_parser, or_dash};

/// Strategy for parsing a flight-search command.
#[derive(Debug, Clone, Copy)]
pub struct FlightStrategy;

impl super::CommandStrategy for FlightStrategy {
    type Input = ParseInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default();
        let parser = build_parser(&config)?;
        let anchor = anchor_date(input.date.as_deref())?;

        info!("parsing flight command anchored at {anchor}");
        let parsed = parser.parse_flight(&input.text, anchor);

        if input.json {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            return Ok(());
        }

        print_summary(&parsed);
        if parsed.is_actionable(config.parser.min_confidence) {
            println!();
            println!("Ready to search.");
        } else {
            print_errors(&parsed.errors);
        }
        Ok(())
    }
}

fn print_summary(parsed: &ParsedFlightCommand) {
    println!("Origin:      {}", or_dash(&parsed.origin));
    println!("Destination: {}", or_dash(&parsed.destination));
    println!("Departure:   {}", or_dash(&parsed.departure_date));
    if let Some(return_date) = &parsed.return_date {
        println!("Return:      {return_date}");
    }
    println!("Passengers:  {}", parsed.passengers);
    println!("Class:       {}", parsed.cabin_class);
    println!("Confidence:  {}", parsed.confidence);
}

fn print_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    println!();
    println!("Needs correction:");
    for error in errors {
        println!("  - {error}");
    }
}
