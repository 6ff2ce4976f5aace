//! `YYYY-MM-DD` formatting for chart axes and tooltips.
//!
//! [`format_date`] never fails. Input that cannot be read as a date formats
//! as [`INVALID_DATE`], which chart labels show verbatim.

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Output for values that are not dates.
pub const INVALID_DATE: &str = "NaN-NaN-NaN";

const DATE_ONLY: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

const LOCAL_DATE_TIMES: [&[BorrowedFormatItem<'_>]; 6] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

/// Anything [`format_date`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Date(Date),
    DateTime(PrimitiveDateTime),
    OffsetDateTime(OffsetDateTime),
    /// Milliseconds since the Unix epoch, read in UTC.
    UnixMillis(i64),
    Text(&'a str),
}

impl From<Date> for DateInput<'_> {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<PrimitiveDateTime> for DateInput<'_> {
    fn from(value: PrimitiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<OffsetDateTime> for DateInput<'_> {
    fn from(value: OffsetDateTime) -> Self {
        Self::OffsetDateTime(value)
    }
}

impl From<i64> for DateInput<'_> {
    fn from(value: i64) -> Self {
        Self::UnixMillis(value)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl DateInput<'_> {
    /// Calendar date of the value, if it is one.
    pub fn to_date(self) -> Option<Date> {
        match self {
            Self::Date(date) => Some(date),
            Self::DateTime(value) => Some(value.date()),
            Self::OffsetDateTime(value) => Some(value.date()),
            Self::UnixMillis(millis) => {
                OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
                    .ok()
                    .map(OffsetDateTime::date)
            }
            Self::Text(text) => parse_text(text),
        }
    }
}

/// Format a date-like value as zero-padded `YYYY-MM-DD`.
pub fn format_date<'a>(value: impl Into<DateInput<'a>>) -> String {
    match value.into().to_date() {
        Some(date) => format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        ),
        None => String::from(INVALID_DATE),
    }
}

// Text keeps the calendar date it was written with; offsets are not applied.
fn parse_text(text: &str) -> Option<Date> {
    let text = text.trim();

    if let Ok(date) = Date::parse(text, DATE_ONLY) {
        return Some(date);
    }

    for format in LOCAL_DATE_TIMES {
        if let Ok(value) = PrimitiveDateTime::parse(text, format) {
            return Some(value.date());
        }
    }

    OffsetDateTime::parse(text, &Rfc3339)
        .ok()
        .map(OffsetDateTime::date)
}
