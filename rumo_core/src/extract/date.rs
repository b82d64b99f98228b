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

//! Relative and absolute date resolution.
//!
//! Categories are checked in a fixed order and the first match wins, with
//! no backtracking: literals, day + month-name, numeric `D/M`, then the
//! fully-qualified `D-M-YYYY` form. Year-less dates that already passed
//! relative to the anchor roll forward to the next year ("15 de março" said
//! in June means next March). The resolver never panics; anything it cannot
//! read, including impossible calendar dates, is simply not found.

use chrono::{Datelike, Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rumo_locale::{month_index, normalize};

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static DAY_MONTH_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:no dia |dia )?(\d{1,2}) de ([a-z]+)").expect("valid day/month-name pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static DAY_SLASH_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?").expect("valid numeric date pattern")
});

#[expect(
    clippy::expect_used,
    reason = "pattern is a compile-time constant covered by tests"
)]
static FULL_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})-(\d{1,2})-(\d{4})\b").expect("valid full date pattern")
});

/// Resolve the first date expression in `text`, relative to `anchor`.
#[must_use]
pub fn resolve_date(text: &str, anchor: NaiveDate) -> Option<NaiveDate> {
    let text = normalize(text);

    // Literal expressions. "depois de amanha" is checked before the bare
    // "amanha" it contains.
    if text.contains("hoje") {
        return Some(anchor);
    }
    if text.contains("depois de amanha") {
        return anchor.checked_add_days(Days::new(2));
    }
    if text.contains("amanha") {
        return anchor.checked_add_days(Days::new(1));
    }
    if text.contains("proxima semana") || text.contains("semana que vem") {
        return anchor.checked_add_days(Days::new(7));
    }

    // Day plus spelled month, with or without a leading "dia" marker.
    if let Some(caps) = DAY_MONTH_NAME.captures(&text) {
        let day: u32 = caps.get(1)?.as_str().parse().ok()?;
        let month = month_index(caps.get(2)?.as_str())? + 1;
        return with_rollover(anchor, month, day);
    }

    // Numeric day/month; a present year is used as-is.
    if let Some(caps) = DAY_SLASH_MONTH.captures(&text) {
        let day: u32 = caps.get(1)?.as_str().parse().ok()?;
        let month: u32 = caps.get(2)?.as_str().parse().ok()?;
        if let Some(year) = caps.get(3) {
            let year: i32 = year.as_str().parse().ok()?;
            let year = if year < 100 { year + 2000 } else { year };
            return NaiveDate::from_ymd_opt(year, month, day);
        }
        return with_rollover(anchor, month, day);
    }

    // Fully qualified day-month-year, no rollover.
    if let Some(caps) = FULL_DATE.captures(&text) {
        let day: u32 = caps.get(1)?.as_str().parse().ok()?;
        let month: u32 = caps.get(2)?.as_str().parse().ok()?;
        let year: i32 = caps.get(3)?.as_str().parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

/// Build a date in the anchor's year, rolling forward one year when the
/// result already passed.
fn with_rollover(anchor: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(anchor.year(), month, day)?;
    if date < anchor {
        NaiveDate::from_ymd_opt(anchor.year() + 1, month, day)
    } else {
        Some(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn literal_today() {
        let anchor = date(2024, 1, 1);
        assert_eq!(resolve_date("quero viajar hoje", anchor), Some(anchor));
    }

    #[test]
    fn literal_tomorrow() {
        let anchor = date(2024, 1, 1);
        assert_eq!(resolve_date("amanhã", anchor), Some(date(2024, 1, 2)));
    }

    #[test]
    fn literal_day_after_tomorrow_wins_over_tomorrow() {
        let anchor = date(2024, 1, 1);
        assert_eq!(
            resolve_date("depois de amanhã", anchor),
            Some(date(2024, 1, 3))
        );
    }

    #[test]
    fn literal_next_week() {
        let anchor = date(2024, 1, 1);
        assert_eq!(
            resolve_date("na próxima semana", anchor),
            Some(date(2024, 1, 8))
        );
        assert_eq!(
            resolve_date("semana que vem", anchor),
            Some(date(2024, 1, 8))
        );
    }

    #[test]
    fn day_month_name_without_rollover() {
        let anchor = date(2024, 1, 1);
        assert_eq!(
            resolve_date("15 de março", anchor),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn day_month_name_rolls_into_next_year() {
        let anchor = date(2024, 6, 1);
        assert_eq!(
            resolve_date("15 de março", anchor),
            Some(date(2025, 3, 15))
        );
    }

    #[test]
    fn day_month_name_with_dia_marker() {
        let anchor = date(2024, 1, 1);
        assert_eq!(
            resolve_date("no dia 5 de dezembro", anchor),
            Some(date(2024, 12, 5))
        );
    }

    #[test]
    fn anchor_date_itself_does_not_roll() {
        let anchor = date(2024, 3, 15);
        assert_eq!(
            resolve_date("15 de março", anchor),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn numeric_day_month() {
        let anchor = date(2024, 1, 1);
        assert_eq!(resolve_date("viajar 15/3", anchor), Some(date(2024, 3, 15)));
    }

    #[test]
    fn numeric_day_month_rolls_over() {
        let anchor = date(2024, 6, 1);
        assert_eq!(resolve_date("15/03", anchor), Some(date(2025, 3, 15)));
    }

    #[test]
    fn numeric_date_with_year_is_used_as_is() {
        let anchor = date(2024, 6, 1);
        assert_eq!(
            resolve_date("15/03/2024", anchor),
            Some(date(2024, 3, 15))
        );
        assert_eq!(resolve_date("15/03/24", anchor), Some(date(2024, 3, 15)));
    }

    #[test]
    fn full_date_dash_form() {
        let anchor = date(2024, 6, 1);
        assert_eq!(
            resolve_date("15-03-2024", anchor),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn impossible_date_is_not_found() {
        let anchor = date(2024, 1, 1);
        assert_eq!(resolve_date("32 de março", anchor), None);
        assert_eq!(resolve_date("31/02", anchor), None);
    }

    #[test]
    fn no_date_expression_is_not_found() {
        let anchor = date(2024, 1, 1);
        assert_eq!(resolve_date("de são paulo para miami", anchor), None);
        assert_eq!(resolve_date("", anchor), None);
    }

    #[test]
    fn first_expression_wins() {
        let anchor = date(2024, 1, 1);
        assert_eq!(
            resolve_date("dia 10 de março voltando dia 20 de março", anchor),
            Some(date(2024, 3, 10))
        );
    }
}
