use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDateTime;

use crate::model::donation::Donation;
use crate::repository::json_file::JsonFile;
use crate::repository::traits::DonationRepository;

const DONATION_FILE_NAME: &str = "donations.json";

#[derive(Clone)]
pub struct FileDonationRepository {
    file: JsonFile,
}

impl FileDonationRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let file = JsonFile::open::<Donation>(base_dir, DONATION_FILE_NAME)?;
        Ok(Self { file })
    }
}

impl DonationRepository for FileDonationRepository {
    fn create(&self, donation: Donation) -> Result<Donation> {
        let mut donations: Vec<Donation> = self.file.read_all()?;
        donations.push(donation.clone());
        self.file.write_all(&donations)?;
        Ok(donation)
    }

    fn list_for_family(&self, family_id: u32, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Donation>> {
        let (from, to) = if start <= end { (start, end) } else { (end, start) };
        let donations: Vec<Donation> = self.file.read_all()?;
        Ok(donations
            .into_iter()
            .filter(|d| d.donor_id == family_id || d.donee_id == family_id)
            .filter(|d| d.date_sent >= from && d.date_sent <= to)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_list_either_side_and_bound_order() {
        let dir = tempdir().unwrap();
        let repo = FileDonationRepository::new(Some(dir.path().to_path_buf())).unwrap();
        repo.create(Donation::new(1, 2, 1.5, at(5))).unwrap();
        repo.create(Donation::new(3, 1, 2.0, at(6))).unwrap();
        repo.create(Donation::new(2, 3, 4.0, at(6))).unwrap();
        repo.create(Donation::new(1, 3, 1.0, at(20))).unwrap();

        let forward = repo.list_for_family(1, at(4), at(10)).unwrap();
        let reversed = repo.list_for_family(1, at(10), at(4)).unwrap();
        assert_eq!(forward.len(), 2);
        assert_eq!(forward, reversed);

        // inclusive on both ends
        assert_eq!(repo.list_for_family(1, at(5), at(6)).unwrap().len(), 2);
    }
}
