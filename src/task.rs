use crate::annotate::MonthBlock;
use crate::interval::DateSpan;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task '{name}' must last at least one day")]
    ZeroLength { name: String },
    #[error("task '{name}' lasts {length_days} days, more than the limit of {}", MAX_TASK_DAYS)]
    TooLong { name: String, length_days: u32 },
}

/// Longest task accepted, in working days (about two centuries of calendar
/// time), so parsed schedules stay far from the end of the `NaiveDate` range.
pub const MAX_TASK_DAYS: u32 = 50_000;

/// A parsed work item, scheduled in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub name: String,
    pub short_name: String,
    length_days: u32,
}

impl Task {
    pub fn new(name: impl Into<String>, length_days: u32) -> Result<Self, TaskError> {
        let name = name.into();
        if length_days == 0 {
            return Err(TaskError::ZeroLength { name });
        }
        if length_days > MAX_TASK_DAYS {
            return Err(TaskError::TooLong { name, length_days });
        }
        Ok(Self {
            name,
            short_name: String::new(),
            length_days,
        })
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Working days the task needs, between 1 and [`MAX_TASK_DAYS`].
    pub fn length_days(&self) -> u32 {
        self.length_days
    }
}

/// A task with its occupied business-day span `[begin, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub task: Task,
    pub span: DateSpan,
    /// Holiday-masked weekdays skipped after the task started (since the last realignment).
    pub masked_days: u32,
    /// Number of times the task was re-anchored to a Monday.
    pub realignments: u32,
}

impl ScheduledTask {
    pub fn begin(&self) -> NaiveDate {
        self.span.begin()
    }

    pub fn end(&self) -> NaiveDate {
        self.span.end()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.span.last_day()
    }

    pub fn was_realigned(&self) -> bool {
        self.realignments > 0
    }

    /// Header line shown above the rendered calendars.
    pub fn date_range_label(&self) -> String {
        format!("{} {}", self.task.short_name, self.span)
    }
}

#[derive(Serialize, Deserialize)]
struct ScheduledTaskRecord {
    name: String,
    short_name: String,
    length_days: u32,
    begin: NaiveDate,
    end: NaiveDate,
    masked_days: u32,
    realignments: u32,
}

impl From<&ScheduledTask> for ScheduledTaskRecord {
    fn from(scheduled: &ScheduledTask) -> Self {
        Self {
            name: scheduled.task.name.clone(),
            short_name: scheduled.task.short_name.clone(),
            length_days: scheduled.task.length_days(),
            begin: scheduled.begin(),
            end: scheduled.end(),
            masked_days: scheduled.masked_days,
            realignments: scheduled.realignments,
        }
    }
}

impl Serialize for ScheduledTask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ScheduledTaskRecord::from(self).serialize(serializer)
    }
}

/// A scheduled task together with its highlighted month calendars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedTask {
    pub scheduled: ScheduledTask,
    pub months: Vec<MonthBlock>,
}

impl AnnotatedTask {
    /// All month blocks concatenated, one grid after another.
    pub fn calendar_text(&self) -> String {
        self.months.iter().map(|block| block.text.as_str()).collect()
    }
}
