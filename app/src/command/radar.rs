use rumo_config::Config;
use rumo_core::ParsedRadarCommand;
use tracing::info;

use super::{ParseInput, anchor_date, build_parser, or_dash};

/// Strategy for parsing a fare-radar command.
#[derive(Debug, Clone, Copy)]
pub struct RadarStrategy;

impl super::CommandStrategy for RadarStrategy {
    type Input = ParseInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default();
        let parser = build_parser(&config)?;
        let anchor = anchor_date(input.date.as_deref())?;

        info!("parsing radar command anchored at {anchor}");
        let parsed = parser.parse_radar(&input.text, anchor);

        if input.json {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            return Ok(());
        }

        print_summary(&parsed);
        if parsed.has_route() && parsed.confidence >= config.parser.min_confidence {
            println!();
            println!("Ready to monitor.");
        } else if !parsed.errors.is_empty() {
            println!();
            println!("Needs correction:");
            for error in &parsed.errors {
                println!("  - {error}");
            }
        }
        Ok(())
    }
}

fn print_summary(parsed: &ParsedRadarCommand) {
    println!("Origin:      {}", or_dash(&parsed.origin));
    println!("Destination: {}", or_dash(&parsed.destination));
    if let Some(start) = &parsed.window_start {
        println!("From:        {start}");
    }
    if let Some(end) = &parsed.window_end {
        println!("Until:       {end}");
    }
    match parsed.threshold_value {
        Some(value) => println!("Threshold:   {value} ({})", parsed.threshold_kind),
        None => println!("Threshold:   -"),
    }
    println!("Confidence:  {}", parsed.confidence);
}
