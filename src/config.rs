use crate::markup::Markup;
use crate::render::RenderOptions;
use crate::schedule::ScheduleOptions;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Planner settings, loadable from a JSON file. Missing keys take defaults.
///
/// ```json
/// { "start": "2025-01-06", "realign": false, "markup": "html",
///   "holidays": ["company.HOL"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// First day to schedule from; today when unset.
    pub start: Option<NaiveDate>,
    pub realign: bool,
    pub markup: Markup,
    pub description_width: usize,
    pub table_width: usize,
    /// Holiday files loaded in addition to `.HOL` inputs.
    pub holidays: Vec<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            start: None,
            realign: ScheduleOptions::default().realign,
            markup: render.markup,
            description_width: render.description_width,
            table_width: render.table_width,
            holidays: Vec::new(),
        }
    }
}

impl PlannerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn start_or(&self, today: NaiveDate) -> NaiveDate {
        self.start.unwrap_or(today)
    }

    pub fn schedule_options(&self) -> ScheduleOptions {
        ScheduleOptions {
            realign: self.realign,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            markup: self.markup,
            table_width: self.table_width,
            description_width: self.description_width,
        }
    }
}
