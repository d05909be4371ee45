use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: NaiveDate,
    pub y: f64,
    /// Zero point inserted across a gap rather than taken from a booking.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub filler: bool,
}

impl ChartPoint {
    pub fn new(x: NaiveDate, y: f64) -> Self {
        Self { x, y, filler: false }
    }

    pub fn filler(x: NaiveDate) -> Self {
        Self { x, y: 0.0, filler: true }
    }
}

/// One line on the history chart, usually a single parent's hours.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ChartDataSet {
    pub label: String,
    pub color: String,
    pub fill: bool,
    pub baseline: f64,
    pub data: Vec<ChartPoint>,
}

impl ChartDataSet {
    pub fn add_point(&mut self, point: ChartPoint) {
        self.data.push(point);
    }

    pub fn configure_as_historical_hours(&mut self, label: &str, color: String, fill: bool, baseline: f64) {
        self.label = label.to_string();
        self.color = color;
        self.fill = fill;
        self.baseline = baseline;
    }

    /// Stable ascending sort by `x`; same-day points keep insertion order.
    pub fn sort_by_date(&mut self) {
        self.data.sort_by_key(|p| p.x);
    }

    pub fn total(&self) -> f64 {
        self.data.iter().map(|p| p.y).sum()
    }

    pub fn recorded_points(&self) -> impl Iterator<Item = &ChartPoint> {
        self.data.iter().filter(|p| !p.filler)
    }
}
