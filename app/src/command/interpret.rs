use rumo_config::Config;
use rumo_core::ParsedCommand;
use tracing::info;

use super::{ParseInput, anchor_date, build_parser, or_dash};

/// Strategy for keyword dispatch between the two parsers.
#[derive(Debug, Clone, Copy)]
pub struct InterpretStrategy;

impl super::CommandStrategy for InterpretStrategy {
    type Input = ParseInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default();
        let parser = build_parser(&config)?;
        let anchor = anchor_date(input.date.as_deref())?;

        let parsed = parser.interpret(&input.text, anchor);

        if input.json {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            return Ok(());
        }

        match parsed {
            ParsedCommand::Flight(flight) => {
                info!("interpreted as flight search");
                println!("Interpreted as: flight search");
                println!(
                    "  {} -> {} on {} ({} pax, {}, confidence {})",
                    or_dash(&flight.origin),
                    or_dash(&flight.destination),
                    or_dash(&flight.departure_date),
                    flight.passengers,
                    flight.cabin_class,
                    flight.confidence
                );
            }
            ParsedCommand::Radar(radar) => {
                info!("interpreted as fare radar");
                println!("Interpreted as: fare radar");
                println!(
                    "  {} -> {} (threshold {:?} {}, confidence {})",
                    or_dash(&radar.origin),
                    or_dash(&radar.destination),
                    radar.threshold_value,
                    radar.threshold_kind,
                    radar.confidence
                );
            }
        }
        Ok(())
    }
}
