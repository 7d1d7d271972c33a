//! Loading holidays and tasks from command-line inputs.
//!
//! Arguments ending in `.HOL` are holiday files. Every other argument is a
//! task file when such a file exists and literal task text otherwise.

use crate::calendar::{Holiday, HolidaySet};
use crate::interval::SpanError;
use crate::task::{Task, TaskError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub mod dates;
pub mod holidays;
pub mod tasks;

pub use dates::{parse_date, parse_date_expr};
pub use holidays::parse_holidays;
pub use tasks::{parse_task_block, parse_tasks};

pub const HOLIDAY_SUFFIX: &str = ".HOL";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse date '{text}'")]
    InvalidDate { text: String },
    #[error(transparent)]
    Span(#[from] SpanError),
    #[error("holiday line {line} is not 'name,date': {text}")]
    MalformedHolidayLine { line: u64, text: String },
    #[error("could not parse duration '{duration}' of task:\n{block}")]
    InvalidDuration { block: String, duration: String },
    #[error(transparent)]
    Task(#[from] TaskError),
}

impl InputError {
    pub fn read<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type InputResult<T> = Result<T, InputError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    HolidayFile(PathBuf),
    TaskFile(PathBuf),
    Literal(String),
}

impl InputSource {
    pub fn classify(arg: &str) -> Self {
        if arg.ends_with(HOLIDAY_SUFFIX) {
            InputSource::HolidayFile(PathBuf::from(arg))
        } else if Path::new(arg).is_file() {
            InputSource::TaskFile(PathBuf::from(arg))
        } else {
            InputSource::Literal(arg.to_string())
        }
    }
}

/// Holidays and tasks gathered from all inputs.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub holidays: HolidaySet,
    pub tasks: Vec<Task>,
}

/// Read and parse every input argument.
///
/// Unreadable files and malformed tasks are errors; malformed holiday lines
/// are only logged.
pub fn load_inputs<S: AsRef<str>>(args: &[S]) -> InputResult<Inputs> {
    load_inputs_with_holidays(&[], args)
}

/// Like [`load_inputs`], with `holiday_files` read as holidays first whatever
/// their names end in.
pub fn load_inputs_with_holidays<S: AsRef<str>>(
    holiday_files: &[PathBuf],
    args: &[S],
) -> InputResult<Inputs> {
    let mut holidays = Vec::new();
    for path in holiday_files {
        holidays.extend(read_holiday_file(path)?);
    }

    let mut texts = Vec::new();
    for arg in args {
        match InputSource::classify(arg.as_ref()) {
            InputSource::HolidayFile(path) => holidays.extend(read_holiday_file(&path)?),
            InputSource::TaskFile(path) => texts.push(read(&path)?),
            InputSource::Literal(text) => texts.push(text),
        }
    }

    let tasks = parse_tasks(&texts.join("\n\n"))?;
    Ok(Inputs {
        holidays: HolidaySet::new(holidays),
        tasks,
    })
}

fn read_holiday_file(path: &Path) -> InputResult<Vec<Holiday>> {
    let source = read(path)?;
    let parsed = parse_holidays(&source, &path.display().to_string());
    debug!(file = %path.display(), count = parsed.len(), "loaded holidays");
    Ok(parsed.iter().cloned().collect())
}

fn read(path: &Path) -> InputResult<String> {
    fs::read_to_string(path).map_err(|err| InputError::read(path, err))
}
