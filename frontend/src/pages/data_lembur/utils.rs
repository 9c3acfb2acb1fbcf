use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use leptos::*;

use crate::api::OvertimeRecord;
use crate::utils::time::format_tanggal;

/// Signal-backed filter inputs for the overtime table. The table derives its
/// view from a `snapshot()` on every render.
#[derive(Clone, Copy)]
pub struct LemburFilterState {
    query: RwSignal<String>,
    day: RwSignal<String>,
    month: RwSignal<String>,
    year: RwSignal<String>,
}

impl Default for LemburFilterState {
    fn default() -> Self {
        Self {
            query: create_rw_signal(String::new()),
            day: create_rw_signal(String::new()),
            month: create_rw_signal(String::new()),
            year: create_rw_signal(String::new()),
        }
    }
}

impl LemburFilterState {
    pub fn query_signal(&self) -> RwSignal<String> {
        self.query
    }

    pub fn day_signal(&self) -> RwSignal<String> {
        self.day
    }

    pub fn month_signal(&self) -> RwSignal<String> {
        self.month
    }

    pub fn year_signal(&self) -> RwSignal<String> {
        self.year
    }

    pub fn snapshot(&self) -> LemburFilter {
        LemburFilter {
            query: self.query.get(),
            day: parse_selection(&self.day.get()),
            month: parse_selection(&self.month.get()),
            year: parse_selection(&self.year.get()),
        }
    }
}

/// Plain-value rendition of the filter inputs. An empty selector is `None`
/// and matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LemburFilter {
    pub query: String,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl LemburFilter {
    pub fn matches(&self, record: &OvertimeRecord) -> bool {
        let matches_search = record.id_user.to_string().contains(&self.query);
        let date = parse_tanggal(&record.tanggal);
        let matches_date = matches_part(self.day, date.map(|d| d.day()))
            && matches_part(self.month, date.map(|d| d.month()))
            && matches_part(self.year, date.map(|d| d.year()));
        matches_search && matches_date
    }
}

fn matches_part<T: PartialEq>(selected: Option<T>, actual: Option<T>) -> bool {
    match selected {
        None => true,
        Some(selected) => actual == Some(selected),
    }
}

fn parse_selection<T: std::str::FromStr>(raw: &str) -> Option<T> {
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

/// The service mixes plain dates, naive datetimes and RFC 3339 stamps in
/// `tanggal`.
pub fn parse_tanggal(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

pub fn display_tanggal(raw: &str) -> String {
    parse_tanggal(raw)
        .map(format_tanggal)
        .unwrap_or_else(|| raw.to_string())
}

pub fn day_options() -> Vec<u32> {
    (1..=31).collect()
}

pub fn month_options() -> Vec<u32> {
    (1..=12).collect()
}

/// The current year and the 4 preceding years, oldest first.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - 4..=current_year).collect()
}
