use anyhow::Result;
use chrono::NaiveDateTime;

use crate::model::booking::Booking;
use crate::model::donation::Donation;
use crate::model::family::{Family, User};

pub trait FamilyRepository {
    fn create(&self, family: Family) -> Result<Family>;
    fn get(&self, id: u32) -> Result<Family>;
    fn list(&self) -> Result<Vec<Family>>;
    fn add_parent(&self, family_id: u32, first_name: &str, last_name: &str) -> Result<User>;
}

pub trait BookingRepository {
    fn create(&self, booking: Booking) -> Result<Booking>;
    /// Bookings of `family_id` lying entirely within `[start, end]`,
    /// ordered by start. No matches is an empty list.
    fn list_for_family(&self, family_id: u32, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Booking>>;
}

pub trait DonationRepository {
    fn create(&self, donation: Donation) -> Result<Donation>;
    /// Donations sent or received by `family_id` between the two bounds,
    /// inclusive, in either order.
    fn list_for_family(&self, family_id: u32, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Donation>>;
}
