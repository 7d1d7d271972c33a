use super::{InputError, InputResult};
use crate::task::{MAX_TASK_DAYS, Task};
use regex::Regex;
use std::sync::LazyLock;

const DEFAULT_DURATION: &str = "1 day";
const DAYS_PER_WEEK: u32 = 5;

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<length>\d+)\s+(?P<unit>weeks?|days?)").expect("duration pattern is valid")
});

/// Split free text into task blocks separated by blank lines.
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n").trim().to_string());
    }
    blocks
}

/// Working days for a duration such as `3 days` or `2 weeks`.
///
/// Durations over [`MAX_TASK_DAYS`] are rejected like unparseable ones.
pub fn parse_duration(text: &str) -> Option<u32> {
    let caps = DURATION.captures(text.trim())?;
    let length: u32 = caps["length"].parse().ok()?;
    let days = if caps["unit"].starts_with("week") {
        length.checked_mul(DAYS_PER_WEEK)?
    } else {
        length
    };
    (days <= MAX_TASK_DAYS).then_some(days)
}

/// Parse `description[:short]: length unit`. Blocks with an empty name yield `None`.
pub fn parse_task_block(block: &str) -> InputResult<Option<Task>> {
    let (description, duration) = block.rsplit_once(':').unwrap_or((block, DEFAULT_DURATION));

    let length = parse_duration(duration).ok_or_else(|| InputError::InvalidDuration {
        block: block.to_string(),
        duration: duration.trim().to_string(),
    })?;

    let (name, short_name) = description.rsplit_once(':').unwrap_or((description, ""));
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let task = Task::new(name, length)?.with_short_name(short_name.trim());
    Ok(Some(task))
}

/// Parse every block of `text` into tasks, in order.
pub fn parse_tasks(text: &str) -> InputResult<Vec<Task>> {
    let mut tasks = Vec::new();
    for block in split_blocks(text) {
        if let Some(task) = parse_task_block(&block)? {
            tasks.push(task);
        }
    }
    Ok(tasks)
}
