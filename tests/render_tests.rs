use chrono::NaiveDate;
use task_calendar::annotate::annotate;
use task_calendar::interval::DateSpan;
use task_calendar::markup::Markup;
use task_calendar::render::{RenderOptions, render_schedule, render_task, wrap_description};
use task_calendar::task::{AnnotatedTask, ScheduledTask, Task};

const ON: &str = "\x1b[94m";
const OFF: &str = "\x1b[0m";

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn annotated(task: Task, begin: NaiveDate, end: NaiveDate, markup: Markup) -> AnnotatedTask {
    let scheduled = ScheduledTask {
        task,
        span: DateSpan::from_bounds(begin, end).unwrap(),
        masked_days: 0,
        realignments: 0,
    };
    annotate(&scheduled, markup).unwrap()
}

#[test]
fn markers_take_no_width() {
    let text = format!(" 5 {ON}6  7{OFF}");
    assert_eq!(Markup::Ansi.strip(&text), " 5 6  7");
    assert_eq!(Markup::Ansi.visible_width(&text), 7);
    assert_eq!(
        Markup::Html.visible_width("<font color=\"blue\">12</font> 13"),
        5
    );
}

#[test]
fn html_escaping_only_applies_to_html() {
    assert_eq!(Markup::Html.escape("a < b & c"), "a &lt; b &amp; c");
    assert_eq!(Markup::Ansi.escape("a < b & c"), "a < b & c");
}

#[test]
fn plain_paragraph_wraps_greedily() {
    assert_eq!(
        wrap_description("one two three four", 9),
        vec!["one two", "three", "four"]
    );
    assert_eq!(
        wrap_description("supercalifragilistic", 5),
        vec!["supercalifragilistic"]
    );
}

#[test]
fn hyphenated_words_break_after_the_hyphen() {
    assert_eq!(
        wrap_description("a well-known fact", 10),
        vec!["a well-", "known fact"]
    );
    assert_eq!(
        wrap_description("due 2025-01-06 sharp", 12),
        vec!["due", "2025-01-06", "sharp"]
    );
    assert_eq!(wrap_description("x-ray scan", 6), vec!["x-ray", "scan"]);
}

#[test]
fn list_items_get_a_hanging_indent() {
    assert_eq!(
        wrap_description("- alpha beta gamma delta", 14),
        vec!["- alpha beta", "  gamma delta"]
    );
    assert_eq!(
        wrap_description("  1. step one two", 10),
        vec!["  1. step", "     one", "     two"]
    );
}

#[test]
fn task_header_is_centered_over_a_rule() {
    let task = Task::new("Write docs", 3).unwrap().with_short_name("DOC");
    let task = annotated(task, d(2025, 1, 6), d(2025, 1, 9), Markup::Ansi);
    let text = render_task(&task, &RenderOptions::default());
    let lines: Vec<&str> = text.lines().collect();

    let label = "DOC [2025-01-06,2025-01-09)";
    assert_eq!(lines[0], format!("{}{label}", " ".repeat(26)));
    assert_eq!(lines[1], "─".repeat(80));
    assert_eq!(lines[2], "    January 2025      │");
    assert_eq!(lines[3], "Su Mo Tu We Th Fr Sa  │ Write docs");
    assert_eq!(lines[4], "          1  2  3  4  │");
    assert_eq!(
        lines[5],
        format!(" 5  {ON}6  7  8{OFF}  9 10 11  {ON}│{OFF}")
    );
}

#[test]
fn html_text_is_laid_out_before_escaping() {
    let task = Task::new("a & b & c & d", 3)
        .unwrap()
        .with_short_name("R&D");
    let task = annotated(task, d(2025, 1, 6), d(2025, 1, 9), Markup::Html);
    let options = RenderOptions {
        markup: Markup::Html,
        description_width: 11,
        ..RenderOptions::default()
    };
    let text = render_task(&task, &options);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        format!("{}R&amp;D [2025-01-06,2025-01-09)", " ".repeat(26))
    );
    assert!(lines[3].ends_with("│ a &amp; b &amp; c &amp;"), "{}", lines[3]);
    assert!(lines[4].ends_with("│</font> d"), "{}", lines[4]);
}

#[test]
fn highlight_carries_across_calendar_rows() {
    let task = Task::new("Long task", 3).unwrap();
    let task = annotated(task, d(2025, 1, 9), d(2025, 1, 14), Markup::Ansi);
    let text = render_task(&task, &RenderOptions::default());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[5],
        format!(" 5  6  7  8  {ON}9 10 11{OFF}  {ON}│{OFF}")
    );
    assert_eq!(
        lines[6],
        format!("{ON}12 13{OFF} 14 15 16 17 18  {ON}│{OFF}")
    );
    assert_eq!(lines[7], "19 20 21 22 23 24 25  │");
}

#[test]
fn description_longer_than_calendar_adds_rows() {
    let name = (1..=40).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
    let task = annotated(Task::new(name, 1).unwrap(), d(2025, 1, 6), d(2025, 1, 7), Markup::Ansi);
    let options = RenderOptions {
        description_width: 30,
        ..RenderOptions::default()
    };
    let text = render_task(&task, &options);
    let body: Vec<&str> = text.lines().skip(2).collect();

    // 7 calendar lines against a blank line plus many wrapped description lines
    assert!(body.len() > 7);
    let tail = body.last().copied().unwrap();
    assert!(tail.starts_with(&format!("{}  │ word", " ".repeat(20))));
}

#[test]
fn html_schedule_is_a_standalone_document() {
    let task = Task::new("Compare <a> & <b>", 1).unwrap();
    let task = annotated(task, d(2025, 1, 6), d(2025, 1, 7), Markup::Html);
    let options = RenderOptions {
        markup: Markup::Html,
        ..RenderOptions::default()
    };
    let html = render_schedule(&[task], &options);

    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<pre>\n"));
    assert!(html.ends_with("</pre>\n</body>\n</html>\n"));
    assert!(html.contains("Compare &lt;a&gt; &amp; &lt;b&gt;"));
    assert!(html.contains("<font color=\"blue\">6</font>"));
}

#[test]
fn ansi_schedule_separates_tasks_with_blank_lines() {
    let first = annotated(Task::new("First", 1).unwrap(), d(2025, 1, 6), d(2025, 1, 7), Markup::Ansi);
    let second = annotated(Task::new("Second", 1).unwrap(), d(2025, 1, 7), d(2025, 1, 8), Markup::Ansi);
    let text = render_schedule(&[first, second], &RenderOptions::default());

    assert_eq!(text.matches(&"─".repeat(80)).count(), 2);
    assert!(text.contains("\n\n"));
    assert!(!text.contains("<pre>"));
}
