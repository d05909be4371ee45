use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::family::{Family, User};
use crate::repository::json_file::JsonFile;
use crate::repository::traits::FamilyRepository;

const FAMILY_FILE_NAME: &str = "families.json";

#[derive(Clone)]
pub struct FileFamilyRepository {
    file: JsonFile,
}

impl FileFamilyRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let file = JsonFile::open::<Family>(base_dir, FAMILY_FILE_NAME)?;
        Ok(Self { file })
    }
}

impl FamilyRepository for FileFamilyRepository {
    /// Assigns the next free family id, ignoring the one passed in.
    fn create(&self, mut family: Family) -> Result<Family> {
        let mut families: Vec<Family> = self.file.read_all()?;
        family.id = families.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        for parent in &mut family.parents {
            parent.family_id = family.id;
        }
        families.push(family.clone());
        self.file.write_all(&families)?;
        Ok(family)
    }

    fn get(&self, id: u32) -> Result<Family> {
        let families: Vec<Family> = self.file.read_all()?;
        families
            .into_iter()
            .find(|f| f.id == id)
            .ok_or_else(|| anyhow!("Family with ID {} not found", id))
    }

    fn list(&self) -> Result<Vec<Family>> {
        self.file.read_all()
    }

    fn add_parent(&self, family_id: u32, first_name: &str, last_name: &str) -> Result<User> {
        let mut families: Vec<Family> = self.file.read_all()?;
        // user ids are unique across all families
        let next_uid = families
            .iter()
            .flat_map(|f| f.parents.iter().map(|p| p.user_id))
            .max()
            .unwrap_or(0)
            + 1;

        let family = families
            .iter_mut()
            .find(|f| f.id == family_id)
            .ok_or_else(|| anyhow!("Family with ID {} not found", family_id))?;
        let user = User::new(next_uid, family_id, first_name, last_name);
        family.parents.push(user.clone());

        self.file.write_all(&families)?;
        Ok(user)
    }
}
