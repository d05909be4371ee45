pub mod booking;
pub mod chart;
pub mod donation;
pub mod family;
