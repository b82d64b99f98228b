#![deny(
    clippy::all,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::nursery, clippy::pedantic)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    CommandStrategy, FlightStrategy, InfoStrategy, InitStrategy, InterpretStrategy, ParseInput,
    RadarStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "rumo")]
#[command(about = "Voice travel-command parser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a flight-search command
    Flight {
        /// Command text, e.g. "de são paulo para o rio amanhã"
        #[arg(short, long)]
        text: String,

        /// Anchor date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// Parse a fare-radar command
    Radar {
        /// Command text, e.g. "radar de são paulo para paris até dois mil reais"
        #[arg(short, long)]
        text: String,

        /// Anchor date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// Classify the phrase and run the matching parser
    Interpret {
        /// Command text
        #[arg(short, long)]
        text: String,

        /// Anchor date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// Show configuration and table statistics
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Flight { text, date, json } => {
            FlightStrategy.execute(ParseInput { text, date, json })
        }
        Commands::Radar { text, date, json } => {
            RadarStrategy.execute(ParseInput { text, date, json })
        }
        Commands::Interpret { text, date, json } => {
            InterpretStrategy.execute(ParseInput { text, date, json })
        }
        Commands::Info => InfoStrategy.execute(()),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
