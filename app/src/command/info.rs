use rumo_config::Config;

use super::build_parser;

/// Strategy for displaying configuration and table statistics.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default();
        let parser = build_parser(&config)?;

        println!("=== rumo Configuration ===");
        println!();
        println!("Parser:");
        println!("  Min Confidence: {}", config.parser.min_confidence);
        println!();
        println!("Alias Table:");
        println!("  Locations: {}", parser.alias_table().len());
        if config.aliases.is_empty() {
            println!("  Custom Aliases: (none)");
        } else {
            println!("  Custom Aliases:");
            for (code, aliases) in &config.aliases {
                println!("    {code}: {}", aliases.join(", "));
            }
        }

        Ok(())
    }
}
