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

//! Brazilian Portuguese locale data for voice travel commands.
//!
//! All tables in this crate are closed, immutable data: the airport alias
//! table, the spelled-number table, and the month-name table. Extending
//! language or city coverage is a data change here, never an algorithm
//! change in `rumo_core`.

pub mod airports;
pub mod months;
pub mod numerals;
pub mod text;

pub use airports::{AliasTable, LocaleError};
pub use months::month_index;
pub use numerals::numeral_value;
pub use text::normalize;
