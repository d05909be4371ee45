use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::booking::Booking;

/// Where a booking's hours are counted relative to the current week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalClass {
    /// Started before the current week; charted, not totalled.
    Historical,
    /// Started this week before `today`.
    CompletedThisWeek,
    /// Remaining bookings of the current week.
    FutureThisWeek,
}

/// `today` is the unshifted reference moment, even on weekends.
pub fn classify(booking: &Booking, today: NaiveDateTime, week_start: NaiveDateTime) -> IntervalClass {
    if booking.start < week_start {
        IntervalClass::Historical
    } else if booking.start < today && booking.end > week_start {
        IntervalClass::CompletedThisWeek
    } else {
        IntervalClass::FutureThisWeek
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct WeeklyTotals {
    pub booked: f64,
    pub done: f64,
}

impl WeeklyTotals {
    pub fn add(&mut self, class: IntervalClass, hours: f64) {
        match class {
            IntervalClass::Historical => {}
            IntervalClass::CompletedThisWeek => {
                // done hours still count as booked for the week
                self.done += hours;
                self.booked += hours;
            }
            IntervalClass::FutureThisWeek => self.booked += hours,
        }
    }

    pub fn truncated(self) -> Self {
        Self {
            booked: truncate_hundredths(self.booked),
            done: truncate_hundredths(self.done),
        }
    }
}

// Relative snap window for representation error, e.g. 0.29 * 100 = 28.999999999999996.
const SNAP_ULPS: f64 = 8.0 * f64::EPSILON;

/// Truncates toward zero at two decimals: 12.3456 becomes 12.34, -1.239 becomes -1.23.
pub fn truncate_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scaled = value * 100.0;
    let nearest = scaled.round();
    let whole = if (scaled - nearest).abs() <= SNAP_ULPS * scaled.abs().max(1.0) {
        nearest
    } else {
        scaled.trunc()
    };
    (whole as i64) as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn booking(start: NaiveDateTime, hours: i64) -> Booking {
        Booking::new(1, 1, start, start + Duration::hours(hours))
    }

    // Week of Monday 2024-03-04, today Wednesday 2024-03-06 12:00
    fn week_start() -> NaiveDateTime {
        at(4, 0)
    }
    fn today() -> NaiveDateTime {
        at(6, 12)
    }

    #[test]
    fn test_classify_before_week_is_historical() {
        assert_eq!(classify(&booking(at(1, 9), 3), today(), week_start()), IntervalClass::Historical);
        // a block straddling midnight into Monday still started last week
        let straddle = Booking::new(1, 1, at(3, 22), at(4, 2));
        assert_eq!(classify(&straddle, today(), week_start()), IntervalClass::Historical);
    }

    #[test]
    fn test_classify_started_before_today_is_completed() {
        assert_eq!(classify(&booking(at(4, 9), 2), today(), week_start()), IntervalClass::CompletedThisWeek);
        // in progress at the reference moment
        assert_eq!(classify(&booking(at(6, 11), 2), today(), week_start()), IntervalClass::CompletedThisWeek);
    }

    #[test]
    fn test_classify_from_today_onwards_is_future() {
        assert_eq!(classify(&booking(at(6, 12), 1), today(), week_start()), IntervalClass::FutureThisWeek);
        assert_eq!(classify(&booking(at(8, 9), 3), today(), week_start()), IntervalClass::FutureThisWeek);
    }

    #[test]
    fn test_classify_weekend_reference_before_shifted_week() {
        // Saturday reference: the week is next week, so nothing is "done" yet
        let saturday = at(9, 10);
        let next_monday = at(11, 0);
        assert_eq!(classify(&booking(at(8, 9), 2), saturday, next_monday), IntervalClass::Historical);
        assert_eq!(classify(&booking(at(11, 9), 2), saturday, next_monday), IntervalClass::FutureThisWeek);
    }

    #[test]
    fn test_totals_routing() {
        let mut totals = WeeklyTotals::default();
        totals.add(IntervalClass::Historical, 4.0);
        totals.add(IntervalClass::CompletedThisWeek, 2.0);
        totals.add(IntervalClass::FutureThisWeek, 3.0);
        assert_eq!(totals, WeeklyTotals { booked: 5.0, done: 2.0 });
    }

    #[test]
    fn test_credits_reduce_totals() {
        let mut totals = WeeklyTotals::default();
        totals.add(IntervalClass::CompletedThisWeek, 3.0);
        totals.add(IntervalClass::CompletedThisWeek, -1.0);
        assert_eq!(totals, WeeklyTotals { booked: 2.0, done: 2.0 });
    }

    #[test]
    fn test_truncate_hundredths() {
        assert_eq!(truncate_hundredths(12.3456), 12.34);
        assert_eq!(truncate_hundredths(12.349999), 12.34);
        assert_eq!(truncate_hundredths(-1.239), -1.23);
        assert_eq!(truncate_hundredths(0.29), 0.29);
        assert_eq!(truncate_hundredths(5.0), 5.0);
        assert_eq!(truncate_hundredths(0.0), 0.0);
    }

    #[test]
    fn test_truncate_just_below_boundary_never_rounds_up() {
        assert_eq!(truncate_hundredths(12.349999999999), 12.34);
        assert_eq!(truncate_hundredths(0.289999999999), 0.28);
        assert_eq!(truncate_hundredths(-7.009999999999), -7.0);
        // representation error alone still lands on the hundredth
        assert_eq!(truncate_hundredths(0.1 + 0.2), 0.3);
        assert_eq!(truncate_hundredths(12.34), 12.34);
    }

    #[test]
    fn test_truncated_totals() {
        let totals = WeeklyTotals { booked: 7.6666, done: 1.0 / 3.0 }.truncated();
        assert_eq!(totals, WeeklyTotals { booked: 7.66, done: 0.33 });
    }
}
