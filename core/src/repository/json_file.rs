use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::resolve_data_dir;

/// A pretty-printed JSON array on disk, created empty on first use.
#[derive(Clone, Debug)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn open<T: Serialize>(base_dir: Option<PathBuf>, file_name: &str) -> Result<Self> {
        let mut path = resolve_data_dir(base_dir)?;
        fs::create_dir_all(&path)?;
        path.push(file_name);

        let file = Self { path };
        if !file.path.exists() {
            file.write_all::<T>(&[])?;
        }
        Ok(file)
    }

    pub fn read_all<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let items = serde_json::from_reader(reader)?;
        Ok(items)
    }

    pub fn write_all<T: Serialize>(&self, items: &[T]) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, items)?;
        writer.flush()?;
        Ok(())
    }
}
