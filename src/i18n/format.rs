// SPDX-License-Identifier: MPL-2.0
//! Locale-aware formatting of numbers, dates and relative times.

use super::fluent::I18n;
use chrono::{DateTime, Datelike, Utc};
use fluent_bundle::FluentArgs;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

impl I18n {
    /// Formats a number with `,` thousands separators and at most three decimals.
    #[must_use]
    pub fn format_number(&self, value: f64) -> String {
        group_thousands(value)
    }

    /// Formats a calendar date: `Y/M/D` in Chinese, `M/D/Y` otherwise.
    #[must_use]
    pub fn format_date<D: Datelike>(&self, date: &D) -> String {
        if self.is_chinese() {
            format!("{}/{}/{}", date.year(), date.month(), date.day())
        } else {
            format!("{}/{}/{}", date.month(), date.day(), date.year())
        }
    }

    /// Describes how long ago `date` was, relative to the current time.
    #[must_use]
    pub fn format_relative_time(&self, date: DateTime<Utc>) -> String {
        self.format_relative_time_at(date, Utc::now())
    }

    /// Describes how long before `now` the instant `date` was.
    ///
    /// Instants in the future are reported as "now".
    #[must_use]
    pub fn format_relative_time_at(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let seconds = (now - date).num_seconds();

        let (key, unit) = match seconds {
            s if s < MINUTE => return self.tr("time-now"),
            s if s < HOUR => ("time-minutes-ago", MINUTE),
            s if s < DAY => ("time-hours-ago", HOUR),
            s if s < WEEK => ("time-days-ago", DAY),
            s if s < MONTH => ("time-weeks-ago", WEEK),
            s if s < YEAR => ("time-months-ago", MONTH),
            _ => ("time-years-ago", YEAR),
        };

        let mut args = FluentArgs::new();
        args.set("count", seconds / unit);
        self.tr_args(key, &args)
    }
}

fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let digits = integer.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
        grouped.push('-');
    }
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*digit));
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::{Duration, NaiveDate, TimeZone};

    fn english() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default(), None)
    }

    fn chinese() -> I18n {
        I18n::new(Some("zh-CN".into()), &Config::default(), None)
    }

    #[test]
    fn numbers_are_grouped() {
        let i18n = english();
        assert_eq!(i18n.format_number(0.0), "0");
        assert_eq!(i18n.format_number(999.0), "999");
        assert_eq!(i18n.format_number(1234.0), "1,234");
        assert_eq!(i18n.format_number(1_234_567.891), "1,234,567.891");
        assert_eq!(i18n.format_number(-98_765.4321), "-98,765.432");
        assert_eq!(i18n.format_number(2.5), "2.5");
    }

    #[test]
    fn dates_follow_locale_order() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(chinese().format_date(&date), "2024/3/9");
        assert_eq!(english().format_date(&date), "3/9/2024");
    }

    #[test]
    fn relative_time_buckets() {
        let i18n = english();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let ago = |d: Duration| i18n.format_relative_time_at(now - d, now);

        assert_eq!(ago(Duration::seconds(59)), "just now");
        assert_eq!(ago(Duration::seconds(60)), "1 minutes ago");
        assert_eq!(ago(Duration::minutes(59)), "59 minutes ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
        assert_eq!(ago(Duration::days(6)), "6 days ago");
        assert_eq!(ago(Duration::days(14)), "2 weeks ago");
        assert_eq!(ago(Duration::days(90)), "3 months ago");
        assert_eq!(ago(Duration::days(800)), "2 years ago");
    }

    #[test]
    fn future_instants_read_as_now() {
        let i18n = chinese();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let later = now + Duration::hours(1);
        assert_eq!(i18n.format_relative_time_at(later, now), i18n.tr("time-now"));
    }
}
