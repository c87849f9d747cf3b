use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use cubedle_core::DailyRecord;
use log::{debug, warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access save file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to write save file: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The JSON file holding the player's record.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Store { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved record. A missing file means there is no previous
    /// record; an unreadable one is thrown away.
    pub fn load(&self) -> Result<Option<DailyRecord>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No save file at {:?}", self.path);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!("Discarding unreadable save file {:?}: {e}", self.path);
                Ok(None)
            }
        }
    }

    pub fn save(&self, record: &DailyRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write to a temporary file first so an interrupted write never
        // clobbers the previous save.
        let tmp_path = self.path.with_extension("json.tmp");
        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        serde_json::to_writer_pretty(&mut writer, record)?;
        writer.flush()?;
        drop(writer);
        fs::rename(tmp_path, &self.path)?;
        debug!("Saved progress to {:?}", self.path);
        Ok(())
    }
}
