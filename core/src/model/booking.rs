use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;
use uuid::Uuid;

/// A booked time block. `modifier` scales the block's hours; negative
/// values credit time back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub family_id: u32,
    pub user_id: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub room_id: Option<u32>,
    pub modifier: f64,
}

impl Booking {
    pub fn new(family_id: u32, user_id: u32, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            family_id,
            user_id,
            start,
            end,
            room_id: None,
            modifier: 1.0,
        }
    }

    pub fn with_modifier(mut self, modifier: f64) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// Block length in hours scaled by the modifier. Negative when
    /// `end < start` or the modifier is negative.
    pub fn weighted_hours(&self) -> f64 {
        self.duration_hours() * self.modifier
    }
}
