use serde::Serialize;
use time::{Date, Time, format_description::BorrowedFormatItem, macros::format_description};

/// `createdBy` of events created without an explicit author.
pub const DEFAULT_CREATED_BY: &str = "admin";

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub created_by: String,
    /// Usernames in enrollment order.
    pub volunteers: Vec<String>,
}

/// Parses a `YYYY-MM-DD` date and returns it in canonical form.
pub fn parse_date(value: &str) -> ecoclean_shared::Result<String> {
    let Ok(date) = Date::parse(value.trim(), DATE_FORMAT) else {
        ecoclean_shared::user!("Invalid date '{value}', expected YYYY-MM-DD");
    };

    date.format(DATE_FORMAT)
        .map_err(|e| ecoclean_shared::Error::Unknown(e.into()))
}

/// Parses a 24h `HH:MM` time and returns it in canonical form.
pub fn parse_time(value: &str) -> ecoclean_shared::Result<String> {
    let Ok(time) = Time::parse(value.trim(), TIME_FORMAT) else {
        ecoclean_shared::user!("Invalid time '{value}', expected HH:MM");
    };

    time.format(TIME_FORMAT)
        .map_err(|e| ecoclean_shared::Error::Unknown(e.into()))
}
