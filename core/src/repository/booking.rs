use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDateTime, Timelike};

use crate::model::booking::Booking;
use crate::repository::json_file::JsonFile;
use crate::repository::traits::BookingRepository;

const BOOKING_FILE_NAME: &str = "bookings.json";

#[derive(Clone)]
pub struct FileBookingRepository {
    file: JsonFile,
}

impl FileBookingRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let file = JsonFile::open::<Booking>(base_dir, BOOKING_FILE_NAME)?;
        Ok(Self { file })
    }
}

// Blocks are scheduled to the minute.
fn to_minute(moment: NaiveDateTime) -> NaiveDateTime {
    moment
        .with_second(0)
        .and_then(|m| m.with_nanosecond(0))
        .unwrap_or(moment)
}

impl BookingRepository for FileBookingRepository {
    fn create(&self, booking: Booking) -> Result<Booking> {
        let mut bookings: Vec<Booking> = self.file.read_all()?;
        bookings.push(booking.clone());
        self.file.write_all(&bookings)?;
        Ok(booking)
    }

    fn list_for_family(&self, family_id: u32, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Booking>> {
        let bookings: Vec<Booking> = self.file.read_all()?;
        let mut selected: Vec<Booking> = bookings
            .into_iter()
            .filter(|b| b.family_id == family_id)
            .filter(|b| b.start >= start && b.start < end && b.end > start && b.end <= end)
            .map(|mut b| {
                b.start = to_minute(b.start);
                b.end = to_minute(b.end);
                b
            })
            .collect();
        selected.sort_by_key(|b| b.start);
        log::debug!(
            "selected {} bookings for family {} between {} and {}",
            selected.len(),
            family_id,
            start,
            end
        );
        Ok(selected)
    }
}
