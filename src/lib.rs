pub mod annotate;
pub mod calendar;
pub mod config;
pub mod input;
pub mod interval;
pub mod markup;
pub mod month_grid;
pub mod render;
pub mod schedule;
pub mod task;

pub use annotate::{AnnotateError, MonthBlock, annotate, annotate_all};
pub use calendar::{Holiday, HolidaySet, WorkCalendar};
pub use config::{ConfigError, PlannerConfig};
pub use input::{InputError, Inputs, load_inputs, load_inputs_with_holidays};
pub use interval::{DateSpan, SpanError};
pub use markup::Markup;
pub use month_grid::MonthGrid;
pub use render::{RenderOptions, render_schedule};
pub use schedule::{Schedule, ScheduleOptions, ScheduleSummary, Scheduler};
pub use task::{AnnotatedTask, ScheduledTask, Task, TaskError};
