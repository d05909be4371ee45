pub mod accounting;
pub mod config;
pub mod history;
pub mod model;
pub mod period;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use accounting::{classify, truncate_hundredths, IntervalClass, WeeklyTotals};
pub use config::{resolve_data_dir, Config};
pub use history::{GapMetric, HistoryBook, HistoryError};
pub use model::booking::Booking;
pub use model::chart::{ChartDataSet, ChartPoint};
pub use model::donation::Donation;
pub use model::family::{Family, GoalPolicy, User};
pub use period::ReportingWindow;
pub use repository::{
    BookingRepository, DonationRepository, FamilyRepository, FileBookingRepository,
    FileDonationRepository, FileFamilyRepository,
};
pub use service::donation_service::{DonationError, DonationService};
pub use service::dto::FamilyData;
pub use time::{parse_reference_date, parse_timestamp};
pub use usecase::family_data::{summarize_bookings, FamilyDataUseCase, HoursSummary};
