pub mod donation_service;
pub mod dto;
