use super::dates::parse_date_expr;
use super::{InputError, InputResult};
use crate::calendar::{Holiday, HolidaySet};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

/// Parse one `name,dateExpr` record.
pub fn parse_holiday_record(record: &StringRecord, line: u64) -> InputResult<Holiday> {
    if record.len() != 2 {
        return Err(InputError::MalformedHolidayLine {
            line,
            text: record.iter().collect::<Vec<_>>().join(","),
        });
    }
    let span = parse_date_expr(&record[1])?;
    Ok(Holiday::new(&record[0], span))
}

/// Parse the contents of a holiday file.
///
/// The first line is a header. Records that fail to parse are logged and
/// dropped; the rest of the file still loads.
pub fn parse_holidays(source: &str, origin: &str) -> HolidaySet {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source.as_bytes());

    let mut holidays = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!(file = origin, error = %err, "could not read holiday line");
                continue;
            }
        };
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, |pos| pos.line());
        match parse_holiday_record(&record, line) {
            Ok(holiday) => holidays.push(holiday),
            Err(err) => warn!(file = origin, line, error = %err, "skipping holiday line"),
        }
    }
    HolidaySet::new(holidays)
}
