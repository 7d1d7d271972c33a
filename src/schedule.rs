use crate::annotate::{self, AnnotateError};
use crate::calendar::WorkCalendar;
use crate::interval::DateSpan;
use crate::markup::Markup;
use crate::task::{AnnotatedTask, ScheduledTask, Task};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    /// Re-anchor tasks to a Monday when holidays fragment them too much.
    pub realign: bool,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self { realign: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    SeekingStart,
    Accumulating,
    Realigning,
    Done,
}

/// Per-task walk state. The cursor is handed in and out by the caller.
struct Walk {
    current: NaiveDate,
    begin: NaiveDate,
    days_scheduled: u32,
    masked_days: u32,
    realignments: u32,
}

/// Assigns tasks back-to-back business-day spans on a single timeline.
pub struct Scheduler<'a> {
    calendar: &'a WorkCalendar,
    options: ScheduleOptions,
}

impl<'a> Scheduler<'a> {
    pub fn new(calendar: &'a WorkCalendar, options: ScheduleOptions) -> Self {
        Self { calendar, options }
    }

    pub fn calendar(&self) -> &WorkCalendar {
        self.calendar
    }

    /// Starting cursor for `start`: weekends roll forward to Monday.
    pub fn initial_cursor(start: NaiveDate) -> NaiveDate {
        WorkCalendar::weekday_on_or_after(start)
    }

    /// Schedule one task from `cursor`, returning the cursor for the next task.
    ///
    /// The cursor must be a weekday (see [`Scheduler::initial_cursor`]); every
    /// cursor returned by this method is one. Does not terminate if the holiday
    /// set masks every weekday from `cursor` onwards, and panics if the walk
    /// passes `NaiveDate::MAX`. Parsed inputs cap years and task lengths so the
    /// overflow cannot be reached from the command line.
    pub fn schedule_task(&self, cursor: NaiveDate, task: &Task) -> (NaiveDate, ScheduledTask) {
        let mut walk = Walk {
            current: cursor,
            begin: cursor,
            days_scheduled: 0,
            masked_days: 0,
            realignments: 0,
        };
        let mut phase = Phase::SeekingStart;

        loop {
            phase = match phase {
                Phase::SeekingStart => {
                    while !self.calendar.is_available(walk.current) {
                        walk.current = WorkCalendar::next_weekday(walk.current);
                    }
                    walk.begin = walk.current;
                    Phase::Accumulating
                }
                Phase::Accumulating => self.accumulate(&mut walk, task),
                Phase::Realigning => {
                    self.realign(&mut walk, task);
                    Phase::Accumulating
                }
                Phase::Done => break,
            };
        }

        let span = DateSpan::from_bounds(walk.begin, walk.current)
            .expect("a scheduled task always covers at least one working day");
        let scheduled = ScheduledTask {
            task: task.clone(),
            span,
            masked_days: walk.masked_days,
            realignments: walk.realignments,
        };
        (walk.current, scheduled)
    }

    fn accumulate(&self, walk: &mut Walk, task: &Task) -> Phase {
        if walk.days_scheduled >= task.length_days() {
            return Phase::Done;
        }

        while !self.calendar.is_available(walk.current) {
            if self.calendar.is_masked(walk.current) {
                walk.masked_days += 1;
                debug!(task = %task.name, day = %walk.current, "skipping masked day");
            }
            walk.current = WorkCalendar::next_weekday(walk.current);
        }

        walk.current = WorkCalendar::next_weekday(walk.current);
        walk.days_scheduled += 1;

        if self.options.realign && walk.masked_days > task.length_days() {
            Phase::Realigning
        } else {
            Phase::Accumulating
        }
    }

    fn realign(&self, walk: &mut Walk, task: &Task) {
        let mut anchor = self.calendar.next_available(walk.begin);
        while anchor.weekday() != Weekday::Mon {
            anchor = self.calendar.next_available(anchor);
        }
        debug!(
            task = %task.name,
            from = %walk.begin,
            to = %anchor,
            masked = walk.masked_days,
            "realigning fragmented task"
        );
        walk.begin = anchor;
        walk.current = anchor;
        walk.days_scheduled = 0;
        walk.masked_days = 0;
        walk.realignments += 1;
    }

    /// Schedule `tasks` in order, each starting where the previous one ended.
    pub fn schedule(&self, start: NaiveDate, tasks: &[Task]) -> Schedule {
        let initial = (Self::initial_cursor(start), Vec::with_capacity(tasks.len()));
        let (cursor, scheduled) = tasks.iter().fold(initial, |(cursor, mut done), task| {
            let (next, scheduled) = self.schedule_task(cursor, task);
            done.push(scheduled);
            (next, done)
        });

        let schedule = Schedule {
            start,
            cursor,
            tasks: scheduled,
        };
        info!(summary = %schedule.summary().to_cli_summary(), "schedule computed");
        schedule
    }
}

/// Result of scheduling a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    start: NaiveDate,
    cursor: NaiveDate,
    tasks: Vec<ScheduledTask>,
}

impl Schedule {
    /// Requested start date, before weekend adjustment.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Where the next task would begin its search.
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<ScheduledTask> {
        self.tasks
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            task_count: self.tasks.len(),
            realigned_count: self.tasks.iter().filter(|t| t.was_realigned()).count(),
            first_begin: self.tasks.first().map(ScheduledTask::begin),
            last_end: self.tasks.last().map(ScheduledTask::end),
        }
    }

    /// Render every task's month calendars with `markup`.
    pub fn annotate(&self, markup: Markup) -> Result<Vec<AnnotatedTask>, AnnotateError> {
        annotate::annotate_all(&self.tasks, markup)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub task_count: usize,
    pub realigned_count: usize,
    pub first_begin: Option<NaiveDate>,
    pub last_end: Option<NaiveDate>,
}

impl ScheduleSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("tasks={}", self.task_count));
        if let Some(date) = self.first_begin {
            parts.push(format!("begin={}", date));
        }
        if let Some(date) = self.last_end {
            parts.push(format!("end={}", date));
        }
        if self.realigned_count > 0 {
            parts.push(format!("realigned={}", self.realigned_count));
        }
        parts.join(", ")
    }
}
