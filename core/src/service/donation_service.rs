use anyhow::Result;
use chrono::NaiveDateTime;
use thiserror::Error;

use crate::model::donation::Donation;
use crate::model::family::Family;
use crate::repository::DonationRepository;

#[derive(Debug, Error, PartialEq)]
pub enum DonationError {
    #[error("donation amount must be positive, got {0}")]
    NonPositiveAmount(f64),
    #[error("family {0} cannot donate to itself")]
    SelfDonation(u32),
}

pub struct DonationService<R: DonationRepository> {
    repo: R,
}

impl<R: DonationRepository> DonationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn give(&self, donor: &Family, donee: &Family, amount: f64, at: NaiveDateTime) -> Result<Donation> {
        if !(amount > 0.0) {
            log::warn!("rejected donation of {} from family {}", amount, donor.id);
            return Err(DonationError::NonPositiveAmount(amount).into());
        }
        if donor.id == donee.id {
            log::warn!("rejected self-donation by family {}", donor.id);
            return Err(DonationError::SelfDonation(donor.id).into());
        }
        self.repo.create(Donation::new(donor.id, donee.id, amount, at))
    }

    /// Hours received minus hours given between the two bounds.
    pub fn net_for_family(&self, family_id: u32, start: NaiveDateTime, end: NaiveDateTime) -> Result<f64> {
        let donations = self.repo.list_for_family(family_id, start, end)?;
        Ok(donations.iter().map(|d| d.net_for(family_id)).sum())
    }

    pub fn list_for_family(&self, family_id: u32, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Donation>> {
        self.repo.list_for_family(family_id, start, end)
    }
}
