//! schedule - lay tasks out over business days and show them on month calendars
//!
//! Usage:
//!   schedule [OPTIONS] <INPUTS>...
//!
//! Inputs ending in `.HOL` are holiday files (`name,date` or `name,dateA-dateB`
//! lines after a header). Other inputs are task files, or literal task text
//! when no such file exists. Tasks are separated by blank lines and written as
//! `description[:short name]: N days|weeks`.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use task_calendar::input::parse_date;
use task_calendar::{
    Markup, PlannerConfig, Scheduler, WorkCalendar, load_inputs_with_holidays, render_schedule,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "schedule", version, about = "Schedule tasks over business days")]
struct Cli {
    /// Task files, literal task text, or `.HOL` holiday files
    #[arg(required = true, value_name = "INPUTS")]
    inputs: Vec<String>,

    /// First day of the schedule (defaults to today)
    #[arg(long, value_parser = parse_start)]
    start: Option<NaiveDate>,

    /// Emit HTML markup instead of terminal colors
    #[arg(long = "output-html", alias = "output_html")]
    output_html: bool,

    /// Do not realign tasks fragmented by long holidays
    #[arg(long = "no-align", alias = "no_align")]
    no_align: bool,

    /// JSON config file with default settings
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Print the schedule as JSON instead of calendars
    #[arg(long)]
    json: bool,

    /// Log scheduling decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_start(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|err| err.to_string())
}

impl Cli {
    fn planner_config(&self) -> Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::load(path)?,
            None => PlannerConfig::default(),
        };
        if let Some(start) = self.start {
            config.start = Some(start);
        }
        if self.output_html {
            config.markup = Markup::Html;
        }
        if self.no_align {
            config.realign = false;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.planner_config()?;
    debug!(?config, "resolved configuration");

    let inputs = load_inputs_with_holidays(&config.holidays, &cli.inputs)
        .context("failed to load inputs")?;
    debug!(
        holidays = inputs.holidays.len(),
        tasks = inputs.tasks.len(),
        "inputs loaded"
    );

    let calendar = WorkCalendar::new(inputs.holidays);
    let scheduler = Scheduler::new(&calendar, config.schedule_options());
    let start = config.start_or(Local::now().date_naive());
    let schedule = scheduler.schedule(start, &inputs.tasks);

    if cli.json {
        let json = serde_json::to_string_pretty(schedule.tasks())
            .context("failed to serialize schedule")?;
        println!("{json}");
        return Ok(());
    }

    let annotated = schedule
        .annotate(config.markup)
        .context("calendar grid is missing a scheduled day")?;
    print!("{}", render_schedule(&annotated, &config.render_options()));
    Ok(())
}
