//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate strategy type with its own input,
//! dispatched statically from `main`. Strategies hold no state; everything
//! they need arrives through `Self::Input`.

use chrono::NaiveDate;
use rumo_config::Config;
use rumo_core::CommandParser;
use tracing::info;

mod flight;
mod info;
mod init;
mod interpret;
mod radar;
mod version;

pub use flight::FlightStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use interpret::InterpretStrategy;
pub use radar::RadarStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Shared input for the three parsing subcommands.
pub struct ParseInput {
    /// The free-text command.
    pub text: String,
    /// Optional pinned anchor date (`YYYY-MM-DD`).
    pub date: Option<String>,
    /// Print raw JSON instead of the human summary.
    pub json: bool,
}

/// Resolve the anchor date: an explicit `--date`, or today's local date
/// read once.
pub fn anchor_date(date: Option<&str>) -> anyhow::Result<NaiveDate> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("invalid --date '{raw}': {e}")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Build the parser from config when present, or the built-in table.
pub fn build_parser(config: &Config) -> anyhow::Result<CommandParser> {
    let table = config.alias_table()?;
    info!("alias table ready with {} locations", table.len());
    Ok(CommandParser::with_aliases(table))
}

/// Render an unresolved field for the human summary.
pub fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_date_parses_iso_input() {
        let anchor = anchor_date(Some("2024-03-15")).unwrap_or_default();
        assert_eq!(anchor, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default());
    }

    #[test]
    fn anchor_date_rejects_garbage() {
        assert!(anchor_date(Some("15/03/2024")).is_err());
        assert!(anchor_date(Some("soon")).is_err());
    }

    #[test]
    fn or_dash_substitutes_empty_fields() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("GRU"), "GRU");
    }
}
