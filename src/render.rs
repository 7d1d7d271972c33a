//! Side-by-side layout of highlighted calendars and task descriptions.

use crate::markup::Markup;
use crate::task::AnnotatedTask;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

const RULE: &str = "─";
const SEPARATOR: &str = "│";

const HTML_HEADER: &str = "<!DOCTYPE html>
<html>
<head>
    <meta charset=\"UTF-8\">
    <title>Schedule</title>
</head>
<body>
<pre>
";

const HTML_FOOTER: &str = "</pre>
</body>
</html>
";

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<indent>\s*)(?P<marker>\d+\.|-|\*) ").expect("list item pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub markup: Markup,
    /// Width of the header line and rule above each task.
    pub table_width: usize,
    /// Wrap width of the description column.
    pub description_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            markup: Markup::Ansi,
            table_width: 80,
            description_width: 60,
        }
    }
}

/// Render all tasks; HTML output is wrapped in a standalone document.
pub fn render_schedule(tasks: &[AnnotatedTask], options: &RenderOptions) -> String {
    let mut out = String::new();
    if options.markup == Markup::Html {
        out.push_str(HTML_HEADER);
    }
    for task in tasks {
        out.push_str(&render_task(task, options));
        out.push('\n');
    }
    if options.markup == Markup::Html {
        out.push_str(HTML_FOOTER);
    }
    out
}

/// Header, rule, then the calendar column beside the wrapped description.
pub fn render_task(task: &AnnotatedTask, options: &RenderOptions) -> String {
    let markup = options.markup;
    let label = center(&task.scheduled.date_range_label(), options.table_width);

    let mut out = String::new();
    out.push_str(&markup.escape(label.trim_end()));
    out.push('\n');
    out.push_str(&RULE.repeat(options.table_width));
    out.push('\n');

    let calendar = task.calendar_text();
    let cal_lines: Vec<&str> = calendar.lines().collect();
    let cal_width = cal_lines
        .iter()
        .map(|line| markup.visible_width(line))
        .max()
        .unwrap_or(0);

    // Wrap on visible text, escape afterwards.
    let mut description = vec![String::new()];
    description.extend(
        wrap_description(&task.scheduled.task.name, options.description_width)
            .iter()
            .map(|line| markup.escape(line)),
    );

    let rows = cal_lines.len().max(description.len());
    let mut open = false;
    for row in 0..rows {
        let cal = cal_lines.get(row).copied().unwrap_or("");
        let opened_here = cal.contains(markup.start());
        let closed_here = cal.contains(markup.end());
        let highlighted = open || opened_here || closed_here;
        let open_after = still_open(cal, open, markup);

        let mut line = String::new();
        if open {
            line.push_str(markup.start());
        }
        line.push_str(cal);
        if open_after {
            line.push_str(markup.end());
        }
        line.push_str(&" ".repeat(cal_width - markup.visible_width(cal)));
        line.push_str("  ");
        if highlighted {
            line.push_str(markup.start());
            line.push_str(SEPARATOR);
            line.push_str(markup.end());
        } else {
            line.push_str(SEPARATOR);
        }
        line.push(' ');
        if let Some(text) = description.get(row) {
            line.push_str(text);
        }

        out.push_str(line.trim_end());
        out.push('\n');
        open = open_after;
    }
    out
}

/// Whether a highlight is still open after `line`, given the state before it.
fn still_open(line: &str, open_before: bool, markup: Markup) -> bool {
    match (line.rfind(markup.start()), line.rfind(markup.end())) {
        (Some(start), Some(end)) => start > end,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => open_before,
    }
}

/// Greedy word wrap at `width` columns, line by line.
///
/// List items (`- `, `* `, `1. `) keep their indentation and continue under
/// the item text. Hyphenated words may break after a hyphen between letters
/// (`well-` / `known`); otherwise words longer than `width` are never split.
pub fn wrap_description(text: &str, width: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    for line in text.lines() {
        match LIST_ITEM.captures(line) {
            Some(caps) => {
                let indent = &caps["indent"];
                let hanging = " ".repeat(indent.len() + caps["marker"].len() + 1);
                wrapped.extend(wrap_words(line.trim(), width, indent, &hanging));
            }
            None => {
                let indent_len = line.len() - line.trim_start().len();
                wrapped.extend(wrap_words(line, width, &line[..indent_len], ""));
            }
        }
    }
    wrapped
}

fn wrap_words(text: &str, width: usize, first_indent: &str, next_indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = first_indent.to_string();
    let mut indent_len = first_indent.len();

    for word in text.split_whitespace() {
        for (idx, piece) in hyphen_pieces(word).into_iter().enumerate() {
            let joiner = if idx == 0 { " " } else { "" };
            let has_words = current.len() > indent_len;
            if has_words && current.width() + joiner.len() + piece.width() > width {
                lines.push(std::mem::replace(&mut current, next_indent.to_string()));
                indent_len = next_indent.len();
            } else if has_words {
                current.push_str(joiner);
            }
            current.push_str(piece);
        }
    }
    if current.len() > indent_len {
        lines.push(current);
    }
    lines
}

/// Split `word` after each hyphen with two letters on both sides, keeping
/// the hyphen on the left piece. Numbers and dates like `2025-01-06` stay whole.
fn hyphen_pieces(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let is_letter = |pos: usize| chars.get(pos).is_some_and(|(_, c)| c.is_alphabetic());

    let mut pieces = Vec::new();
    let mut from = 0;
    for (pos, &(offset, c)) in chars.iter().enumerate().skip(2) {
        if c == '-'
            && is_letter(pos - 2)
            && is_letter(pos - 1)
            && is_letter(pos + 1)
            && is_letter(pos + 2)
        {
            let split = offset + c.len_utf8();
            pieces.push(&word[from..split]);
            from = split;
        }
    }
    pieces.push(&word[from..]);
    pieces
}

fn center(text: &str, width: usize) -> String {
    let len = text.width();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}", " ".repeat(left), text)
}
