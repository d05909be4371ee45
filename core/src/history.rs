use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use rand::Rng;

use crate::model::booking::Booking;
use crate::model::chart::{ChartDataSet, ChartPoint};

#[derive(Debug, Error, PartialEq)]
pub enum HistoryError {
    #[error("no history series registered for user {0}")]
    UnregisteredOwner(u32),
}

/// How the distance between two chart points is measured.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GapMetric {
    /// Calendar days between the dates.
    #[default]
    ElapsedDays,
    /// Difference of ordinal days within the year. Gaps that cross
    /// January 1st come out negative and are never spanned.
    DayOfYear,
}

impl GapMetric {
    pub fn days_between(self, earlier: NaiveDate, later: NaiveDate) -> i64 {
        match self {
            GapMetric::ElapsedDays => (later - earlier).num_days(),
            GapMetric::DayOfYear => later.ordinal() as i64 - earlier.ordinal() as i64,
        }
    }
}

/// Per-owner history series. Owners must be registered before any of
/// their bookings are recorded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct HistoryBook {
    series: BTreeMap<u32, ChartDataSet>,
}

impl HistoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, owner_id: u32) {
        self.series.entry(owner_id).or_default();
    }

    /// Adds one point at the start day of `booking`. Same-day points are
    /// kept separate.
    pub fn record(&mut self, booking: &Booking) -> Result<(), HistoryError> {
        let point = ChartPoint::new(booking.start.date(), booking.weighted_hours());
        self.series_mut(booking.user_id)?.add_point(point);
        Ok(())
    }

    pub fn series(&self, owner_id: u32) -> Option<&ChartDataSet> {
        self.series.get(&owner_id)
    }

    pub fn series_mut(&mut self, owner_id: u32) -> Result<&mut ChartDataSet, HistoryError> {
        self.series
            .get_mut(&owner_id)
            .ok_or(HistoryError::UnregisteredOwner(owner_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u32, &ChartDataSet)> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl ChartDataSet {
    /// Inserts a zero point halfway across every gap wider than
    /// `threshold_days` so renderers don't interpolate through idle spans.
    /// Leaves the data sorted ascending by date.
    pub fn span_gaps(&mut self, threshold_days: i64, metric: GapMetric) {
        self.sort_by_date();

        let zeros: Vec<ChartPoint> = self
            .data
            .windows(2)
            .filter_map(|pair| {
                let delta = metric.days_between(pair[0].x, pair[1].x);
                (delta > threshold_days).then(|| ChartPoint::filler(pair[0].x + Duration::days(delta / 2)))
            })
            .collect();

        if !zeros.is_empty() {
            self.data.extend(zeros);
            self.sort_by_date();
        }
    }
}

/// A random saturated, mid-brightness colour as `#rrggbb`.
pub fn happy_color() -> String {
    let mut rng = rand::rng();
    let hue = rng.random_range(0.0..360.0);
    let saturation = rng.random_range(0.5..0.8);
    let value = rng.random_range(0.5..0.8);
    let (r, g, b) = hsv_to_rgb(hue, saturation, value);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (u8, u8, u8) {
    let chroma = value * saturation;
    let sector = (hue / 60.0) % 6.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    let channel = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}
