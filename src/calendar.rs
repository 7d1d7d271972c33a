use crate::interval::DateSpan;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A named block of non-working days (public holiday, vacation, shutdown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub span: DateSpan,
}

impl Holiday {
    pub fn new(name: impl Into<String>, span: DateSpan) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Immutable collection of holidays, kept in load order for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    holidays: Vec<Holiday>,
}

impl HolidaySet {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter()
    }

    /// True when any holiday overlaps the single day `day`.
    pub fn is_masked(&self, day: NaiveDate) -> bool {
        self.masking(day).next().is_some()
    }

    /// Holidays covering `day`, in load order.
    pub fn masking(&self, day: NaiveDate) -> impl Iterator<Item = &Holiday> {
        let target = DateSpan::single_day(day);
        self.holidays
            .iter()
            .filter(move |holiday| holiday.span.overlaps(&target))
    }
}

impl FromIterator<Holiday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.iter()
    }
}

/// Business-day calendar: a fixed Saturday/Sunday weekend plus a holiday set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkCalendar {
    holidays: HolidaySet,
}

impl WorkCalendar {
    const WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

    pub fn new(holidays: HolidaySet) -> Self {
        Self { holidays }
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        Self::WEEKEND.contains(&date.weekday())
    }

    pub fn is_masked(&self, date: NaiveDate) -> bool {
        self.holidays.is_masked(date)
    }

    /// Check if a date is available for scheduling
    pub fn is_available(&self, date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !self.is_masked(date)
    }

    /// The next weekday strictly after `from`, ignoring holidays.
    pub fn next_weekday(from: NaiveDate) -> NaiveDate {
        let mut current = from + Duration::days(1);
        while Self::is_weekend(current) {
            current = current + Duration::days(1);
        }
        current
    }

    /// `from` itself when it is a weekday, otherwise the following Monday.
    pub fn weekday_on_or_after(from: NaiveDate) -> NaiveDate {
        if Self::is_weekend(from) {
            Self::next_weekday(from)
        } else {
            from
        }
    }

    /// Find the next available date after a given date
    pub fn next_available(&self, from: NaiveDate) -> NaiveDate {
        let mut current = Self::next_weekday(from);
        while self.is_masked(current) {
            current = Self::next_weekday(current);
        }
        current
    }

    /// Available days inside a half-open span
    pub fn available_days_in_span(&self, span: &DateSpan) -> Vec<NaiveDate> {
        span.days().filter(|day| self.is_available(*day)).collect()
    }

    /// Count available days inside a half-open span
    pub fn count_available_days(&self, span: &DateSpan) -> usize {
        span.days().filter(|day| self.is_available(*day)).count()
    }
}
