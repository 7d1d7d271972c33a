use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::{max, min};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    #[error("date span starting {begin} must cover at least one day")]
    Empty { begin: NaiveDate },
    #[error("date span end {end} precedes its begin {begin}")]
    Inverted { begin: NaiveDate, end: NaiveDate },
}

/// A half-open range of calendar days `[begin, begin + length)`.
///
/// Spans are never empty: every constructor rejects a zero length, so
/// `begin` is always contained in the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct DateSpan {
    begin: NaiveDate,
    length_days: u32,
}

/// Unchecked wire form of [`DateSpan`].
#[derive(Deserialize)]
struct RawSpan {
    begin: NaiveDate,
    length_days: u32,
}

impl TryFrom<RawSpan> for DateSpan {
    type Error = SpanError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        DateSpan::new(raw.begin, raw.length_days)
    }
}

impl DateSpan {
    pub fn new(begin: NaiveDate, length_days: u32) -> Result<Self, SpanError> {
        if length_days == 0 {
            return Err(SpanError::Empty { begin });
        }
        Ok(Self { begin, length_days })
    }

    /// The span covering exactly `day`.
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            begin: day,
            length_days: 1,
        }
    }

    /// Build a span from an inclusive `first..=last` pair, as written in holiday files.
    pub fn from_inclusive(first: NaiveDate, last: NaiveDate) -> Result<Self, SpanError> {
        if last < first {
            return Err(SpanError::Inverted {
                begin: first,
                end: last,
            });
        }
        let length = (last - first).num_days() + 1;
        Self::new(first, length as u32)
    }

    /// Build a span from half-open bounds `[begin, end)`.
    pub fn from_bounds(begin: NaiveDate, end: NaiveDate) -> Result<Self, SpanError> {
        if end < begin {
            return Err(SpanError::Inverted { begin, end });
        }
        Self::new(begin, (end - begin).num_days() as u32)
    }

    pub fn begin(&self) -> NaiveDate {
        self.begin
    }

    /// Exclusive end.
    pub fn end(&self) -> NaiveDate {
        self.begin + Duration::days(i64::from(self.length_days))
    }

    /// Last day inside the span.
    pub fn last_day(&self) -> NaiveDate {
        self.end() - Duration::days(1)
    }

    pub fn length_days(&self) -> u32 {
        self.length_days
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.begin <= day && day < self.end()
    }

    /// Two spans overlap when they share at least one calendar day.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        let latest_begin = max(self.begin, other.begin);
        let earliest_end = min(self.end(), other.end());
        latest_begin < earliest_end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.begin.iter_days().take(self.length_days as usize)
    }
}

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.begin, self.end())
    }
}
