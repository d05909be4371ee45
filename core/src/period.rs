use chrono::{Datelike, Duration, Months, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Week and history bounds for one aggregation run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ReportingWindow {
    pub week_start: NaiveDateTime,
    pub week_end: NaiveDateTime,
    pub history_start: NaiveDateTime,
    pub history_end: NaiveDateTime,
}

impl ReportingWindow {
    /// Resolves the window for `today`. On a weekend the week boundaries
    /// belong to the following Monday's week.
    pub fn resolve(today: NaiveDateTime, period_length_months: u32) -> Self {
        let shifted = shift_weekend(today);
        let week_start = beginning_of_week(shifted);
        let week_end = end_of_week(shifted);
        let history_start = shifted
            .checked_sub_months(Months::new(period_length_months))
            .unwrap_or(NaiveDateTime::MIN);

        Self {
            week_start,
            week_end,
            history_start,
            history_end: week_end,
        }
    }
}

/// Saturday moves forward two days and Sunday one, landing on Monday.
pub fn shift_weekend(today: NaiveDateTime) -> NaiveDateTime {
    match today.weekday() {
        Weekday::Sat => today + Duration::days(2),
        Weekday::Sun => today + Duration::days(1),
        _ => today,
    }
}

/// Monday 00:00 of the week containing `moment`.
pub fn beginning_of_week(moment: NaiveDateTime) -> NaiveDateTime {
    let days_from_monday = moment.weekday().num_days_from_monday() as i64;
    (moment.date() - Duration::days(days_from_monday)).and_time(NaiveTime::MIN)
}

/// Last representable instant of the Sunday closing `moment`'s week.
pub fn end_of_week(moment: NaiveDateTime) -> NaiveDateTime {
    beginning_of_week(moment) + Duration::weeks(1) - Duration::nanoseconds(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_weekday_window() {
        // 2024-03-06 is a Wednesday
        let w = ReportingWindow::resolve(at(2024, 3, 6, 14), 4);
        assert_eq!(w.week_start, at(2024, 3, 4, 0));
        assert_eq!(w.week_end.date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(w.week_end, at(2024, 3, 11, 0) - Duration::nanoseconds(1));
        assert_eq!(w.history_start, at(2023, 11, 6, 14));
        assert_eq!(w.history_end, w.week_end);
    }

    #[test]
    fn test_monday_is_its_own_week_start() {
        let w = ReportingWindow::resolve(at(2024, 3, 4, 0), 4);
        assert_eq!(w.week_start, at(2024, 3, 4, 0));
    }

    #[test]
    fn test_saturday_shifts_to_next_monday() {
        let saturday = at(2024, 3, 9, 10);
        assert_eq!(shift_weekend(saturday), at(2024, 3, 11, 10));

        let w = ReportingWindow::resolve(saturday, 4);
        assert_eq!(w.week_start, at(2024, 3, 11, 0));
        assert_eq!(w.week_end.date(), NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
        assert_eq!(w.history_start, at(2023, 11, 11, 10));
    }

    #[test]
    fn test_sunday_shifts_to_next_monday() {
        let sunday = at(2024, 3, 10, 18);
        assert_eq!(shift_weekend(sunday), at(2024, 3, 11, 18));

        let w = ReportingWindow::resolve(sunday, 4);
        assert_eq!(w.week_start, at(2024, 3, 11, 0));
    }

    #[test]
    fn test_history_start_clamps_short_months() {
        // 2024-07-31 is a Wednesday; February 2024 has 29 days
        let w = ReportingWindow::resolve(at(2024, 7, 31, 9), 5);
        assert_eq!(w.history_start, at(2024, 2, 29, 9));

        // 2023-10-31 is a Tuesday; June has 30 days
        let w = ReportingWindow::resolve(at(2023, 10, 31, 9), 4);
        assert_eq!(w.history_start, at(2023, 6, 30, 9));
    }

    #[test]
    fn test_window_across_year_end() {
        // 2025-01-01 is a Wednesday; its week starts in December
        let w = ReportingWindow::resolve(at(2025, 1, 1, 12), 4);
        assert_eq!(w.week_start, at(2024, 12, 30, 0));
        assert_eq!(w.history_start, at(2024, 9, 1, 12));
    }
}
