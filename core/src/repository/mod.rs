pub mod booking;
pub mod donation;
pub mod family;
pub mod json_file;
pub mod traits;

pub use booking::FileBookingRepository;
pub use donation::FileDonationRepository;
pub use family::FileFamilyRepository;
pub use traits::{BookingRepository, DonationRepository, FamilyRepository};
