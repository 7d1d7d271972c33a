use crate::markup::Markup;
use crate::month_grid::{Highlight, HighlightEnd, MonthGrid};
use crate::task::{AnnotatedTask, ScheduledTask};
use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotateError {
    #[error("day {day} not found in month grid {year}-{month:02}")]
    DayNotInGrid { year: i32, month: u32, day: u32 },
}

/// One rendered month of a task's calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBlock {
    pub year: i32,
    pub month: u32,
    pub highlight: Highlight,
    pub text: String,
}

/// Render the months touched by `scheduled`'s span with the span highlighted.
///
/// The first month is highlighted from the begin day, the last month up to the
/// last day of the span (`end - 1`), and every month in between entirely.
pub fn annotate(scheduled: &ScheduledTask, markup: Markup) -> Result<AnnotatedTask, AnnotateError> {
    let months = month_highlights(scheduled.begin(), scheduled.last_day())
        .into_iter()
        .map(|(grid, highlight)| render_block(&grid, highlight, markup))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnnotatedTask {
        scheduled: scheduled.clone(),
        months,
    })
}

/// Annotate every task; tasks are independent so this runs in parallel.
pub fn annotate_all(
    tasks: &[ScheduledTask],
    markup: Markup,
) -> Result<Vec<AnnotatedTask>, AnnotateError> {
    tasks
        .par_iter()
        .map(|scheduled| annotate(scheduled, markup))
        .collect()
}

fn month_highlights(first: NaiveDate, last: NaiveDate) -> Vec<(MonthGrid, Highlight)> {
    let opening = MonthGrid::containing(first);
    if same_month(first, last) {
        let highlight = Highlight {
            start: first.day(),
            end: HighlightEnd::AfterDay(last.day()),
        };
        return vec![(opening, highlight)];
    }

    let mut blocks = Vec::new();
    let mut grid = opening.next_month();
    blocks.push((
        opening,
        Highlight {
            start: first.day(),
            end: HighlightEnd::EndOfBlock,
        },
    ));

    while !same_month(grid.first_day(), last) {
        let next = grid.next_month();
        blocks.push((
            grid,
            Highlight {
                start: 1,
                end: HighlightEnd::EndOfBlock,
            },
        ));
        grid = next;
    }

    blocks.push((
        grid,
        Highlight {
            start: 1,
            end: HighlightEnd::AfterDay(last.day()),
        },
    ));
    blocks
}

fn render_block(
    grid: &MonthGrid,
    highlight: Highlight,
    markup: Markup,
) -> Result<MonthBlock, AnnotateError> {
    require_day(grid, highlight.start)?;
    if let HighlightEnd::AfterDay(day) = highlight.end {
        require_day(grid, day)?;
    }

    Ok(MonthBlock {
        year: grid.year(),
        month: grid.month(),
        highlight,
        text: grid.render_highlighted(Some(highlight), markup),
    })
}

fn require_day(grid: &MonthGrid, day: u32) -> Result<(), AnnotateError> {
    match grid.cell(day) {
        Some(_) => Ok(()),
        None => Err(AnnotateError::DayNotInGrid {
            year: grid.year(),
            month: grid.month(),
            day,
        }),
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
