use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::TimeGrain;

/// ISO-8601 week-numbering year and week of `date`.
///
/// The date is moved to the Thursday of its Monday-started week; that Thursday
/// decides the year. The first Thursday of a year always falls within its first
/// seven days, so whole weeks elapsed since then give the week number.
pub fn iso_week(date: NaiveDate) -> (i32, u32) {
    let from_monday = i64::from(date.weekday().num_days_from_monday());
    let thursday = date - Duration::days(from_monday) + Duration::days(3);
    let first_thursday_ordinal0 = thursday.ordinal0() % 7;
    let week = 1 + (thursday.ordinal0() - first_thursday_ordinal0) / 7;
    (thursday.year(), week)
}

/// Calendar bucket label for `date`, or `None` when the grain disables bucketing.
pub fn time_bucket(date: NaiveDate, grain: TimeGrain) -> Option<String> {
    match grain {
        TimeGrain::None => None,
        TimeGrain::Day => Some(date.format("%Y-%m-%d").to_string()),
        TimeGrain::Month => Some(date.format("%Y-%m").to_string()),
        TimeGrain::Year => Some(date.format("%Y").to_string()),
        TimeGrain::Week => {
            let (year, week) = iso_week(date);
            Some(format!("{year}-W{week:02}"))
        }
    }
}
