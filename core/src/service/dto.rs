use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;

use crate::history::HistoryBook;

/// Everything a family dashboard shows: this week's hours against the goal
/// and per-parent history for the chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FamilyData {
    pub family_id: u32,
    pub family_name: String,
    /// Current week bounds.
    pub start_moment: NaiveDateTime,
    pub end_moment: NaiveDateTime,
    pub hours_goal: f64,
    pub hours_booked: f64,
    pub hours_done: f64,
    #[serde(rename = "donatedHours")]
    pub net_donations: f64,
    /// Keyed by parent user id.
    pub history: HistoryBook,
    pub start_of_period: NaiveDateTime,
    pub end_of_period: NaiveDateTime,
}

impl FamilyData {
    /// Hours still to be booked to meet the goal, never negative.
    pub fn hours_outstanding(&self) -> f64 {
        (self.hours_goal - self.hours_booked - self.net_donations).max(0.0)
    }
}
