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

//! Extraction stages.
//!
//! Each stage is an independent, total function over free text: it
//! normalizes its own input, never panics, and reports absence through
//! `Option` or a documented default rather than an error.

pub mod cabin;
pub mod date;
pub mod entity;
pub mod passengers;
pub mod threshold;

pub use cabin::extract_cabin;
pub use date::resolve_date;
pub use entity::{Route, extract_route};
pub use passengers::extract_passengers;
pub use threshold::{extract_mileage, extract_price};
