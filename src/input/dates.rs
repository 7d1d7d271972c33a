use super::{InputError, InputResult};
use crate::interval::DateSpan;
use chrono::{Datelike, NaiveDate};

/// Accepted date spellings, tried in order. `%Y` accepts any digit count, so
/// the month-first slash forms go before `%Y/%m/%d` and two-digit years before
/// four-digit ones.
const DATE_FORMATS: [&str; 10] = [
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Latest year accepted. `%Y` takes any number of digits, and later years
/// leave no room to schedule before `NaiveDate::MAX`.
const MAX_YEAR: i32 = 9999;

pub fn parse_date(text: &str) -> InputResult<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .filter(|date| (1..=MAX_YEAR).contains(&date.year()))
        .ok_or_else(|| InputError::InvalidDate {
            text: text.to_string(),
        })
}

/// Parse `date` or an inclusive `dateA-dateB` range into a half-open span.
///
/// ISO dates contain dashes themselves, so a whole-string date wins and
/// otherwise every dash is tried as the range separator.
pub fn parse_date_expr(text: &str) -> InputResult<DateSpan> {
    let text = text.trim();
    if let Ok(day) = parse_date(text) {
        return Ok(DateSpan::single_day(day));
    }

    for (idx, _) in text.match_indices('-') {
        let (first, last) = (&text[..idx], &text[idx + 1..]);
        if let (Ok(first), Ok(last)) = (parse_date(first), parse_date(last)) {
            return Ok(DateSpan::from_inclusive(first, last)?);
        }
    }

    Err(InputError::InvalidDate {
        text: text.to_string(),
    })
}
