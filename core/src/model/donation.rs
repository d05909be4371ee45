use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;
use uuid::Uuid;

/// Hours transferred from one family to another.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: Uuid,
    pub donor_id: u32,
    pub donee_id: u32,
    pub amount: f64,
    pub date_sent: NaiveDateTime,
}

impl Donation {
    pub fn new(donor_id: u32, donee_id: u32, amount: f64, date_sent: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            donor_id,
            donee_id,
            amount,
            date_sent,
        }
    }

    /// Signed effect on `family_id`'s balance: received hours are positive,
    /// given hours negative.
    pub fn net_for(&self, family_id: u32) -> f64 {
        if self.donee_id == family_id {
            self.amount
        } else if self.donor_id == family_id {
            -self.amount
        } else {
            0.0
        }
    }
}
