//! Sunday-first text month calendars.
//!
//! A [`MonthGrid`] is the week-by-week layout of one month. It renders to the
//! classic fixed-width block:
//!
//! ```text
//!     January 2025
//! Su Mo Tu We Th Fr Sa
//!           1  2  3  4
//!  5  6  7  8  9 10 11
//! 12 13 14 15 16 17 18
//! 19 20 21 22 23 24 25
//! 26 27 28 29 30 31
//! ```
//!
//! Day fields are two columns wide and separated by one space; trailing blanks
//! are dropped from every line. Highlight markers are placed by cell, so they
//! never shift a field and are never confused with another day's digits.

use crate::markup::Markup;
use chrono::{Datelike, Duration, NaiveDate};

const WEEK_HEADER: &str = "Su Mo Tu We Th Fr Sa";
const DAY_WIDTH: usize = 2;
const BLOCK_WIDTH: usize = 7 * (DAY_WIDTH + 1) - 1;

/// Position of one day inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    /// Week row, zero-based, not counting the title and header lines.
    pub row: usize,
    /// Column, zero-based, Sunday first.
    pub column: usize,
}

/// Where a highlight closes inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightEnd {
    /// Right after the digits of this day.
    AfterDay(u32),
    /// At the end of the block: the span continues into the next month.
    EndOfBlock,
}

/// A start marker before `start`'s digits and an end marker at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub start: u32,
    pub end: HighlightEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
    weeks: Vec<[Option<u32>; 7]>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self::starting(first))
    }

    /// Grid of the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self::starting(first_of_month(date))
    }

    fn starting(first: NaiveDate) -> Self {
        let offset = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(first);

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut column = offset;
        for day in 1..=days {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        Self { first, weeks }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.first)
    }

    /// Grid of the following month.
    pub fn next_month(&self) -> Self {
        Self::starting(self.first + Duration::days(i64::from(self.days_in_month())))
    }

    pub fn cells(&self) -> impl Iterator<Item = DayCell> + '_ {
        self.weeks.iter().enumerate().flat_map(|(row, week)| {
            week.iter().enumerate().filter_map(move |(column, day)| {
                day.map(|day| DayCell { day, row, column })
            })
        })
    }

    pub fn cell(&self, day: u32) -> Option<DayCell> {
        self.cells().find(|cell| cell.day == day)
    }

    pub fn title(&self) -> String {
        let title = self.first.format("%B %Y").to_string();
        center(&title, BLOCK_WIDTH).trim_end().to_string()
    }

    /// Plain block text, newline-terminated.
    pub fn render(&self) -> String {
        self.render_highlighted(None, Markup::Ansi)
    }

    /// Block text with optional highlight markers.
    ///
    /// Days named by `highlight` must be present in the grid; callers check
    /// with [`MonthGrid::cell`] first.
    pub fn render_highlighted(&self, highlight: Option<Highlight>, markup: Markup) -> String {
        let mut out = String::new();
        out.push_str(&self.title());
        out.push('\n');
        out.push_str(WEEK_HEADER);
        out.push('\n');

        for week in &self.weeks {
            let used = week.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
            let fields: Vec<String> = week[..used]
                .iter()
                .map(|day| match day {
                    Some(day) => render_day(*day, highlight, markup),
                    None => " ".repeat(DAY_WIDTH),
                })
                .collect();
            out.push_str(&fields.join(" "));
            out.push('\n');
        }

        if let Some(Highlight {
            end: HighlightEnd::EndOfBlock,
            ..
        }) = highlight
        {
            out.pop();
            out.push_str(markup.end());
            out.push('\n');
        }
        out
    }
}

fn render_day(day: u32, highlight: Option<Highlight>, markup: Markup) -> String {
    let digits = day.to_string();
    let mut field = " ".repeat(DAY_WIDTH.saturating_sub(digits.len()));
    if let Some(highlight) = highlight {
        if highlight.start == day {
            field.push_str(markup.start());
        }
        field.push_str(&digits);
        if highlight.end == HighlightEnd::AfterDay(day) {
            field.push_str(markup.end());
        }
    } else {
        field.push_str(&digits);
    }
    field
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// Center `text` in `width` columns, putting the odd space on the right for
/// even widths and on the left for odd ones.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
