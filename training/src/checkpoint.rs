use std::fs;
use std::path::{Path, PathBuf};

use candle_nn::VarMap;
use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::error::Result;

/// Local time as used in checkpoint file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H_%M_%S";

/// A model whose current state can be written to disk.
pub trait Checkpoint {
    fn file_extension(&self) -> &str;
    fn save_to(&self, path: &Path) -> Result<()>;
}

impl Checkpoint for VarMap {
    fn file_extension(&self) -> &str {
        "safetensors"
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        self.save(path)?;
        Ok(())
    }
}

/// Called by the training loop after every finished epoch.
/// `epoch` is 1-indexed.
pub trait EpochHook<M: ?Sized> {
    fn on_epoch_end(&mut self, epoch: usize, model: &M) -> Result<()>;
}

pub fn current_time() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn checkpoint_file_name(epoch: usize, timestamp: &DateTime<Local>, extension: &str) -> String {
    format!(
        "epoch_{}_{}.{}",
        epoch,
        timestamp.format(TIMESTAMP_FORMAT),
        extension
    )
}

/// Saves a timestamped checkpoint at the end of every epoch.
pub struct CheckpointSaver {
    save_dir: PathBuf,
    model_name: String,
}

impl CheckpointSaver {
    pub fn new<P: Into<PathBuf>>(save_dir: P, model_name: &str) -> Self {
        Self {
            save_dir: save_dir.into(),
            model_name: model_name.to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.model_save_dir.clone(), &settings.model_name)
    }

    pub fn path(&self, epoch: usize, timestamp: &DateTime<Local>, extension: &str) -> PathBuf {
        self.save_dir
            .join(checkpoint_file_name(epoch, timestamp, extension))
    }
}

impl<M: Checkpoint + ?Sized> EpochHook<M> for CheckpointSaver {
    fn on_epoch_end(&mut self, epoch: usize, model: &M) -> Result<()> {
        let path = self.path(epoch, &Local::now(), model.file_extension());

        fs::create_dir_all(&self.save_dir)?;
        model.save_to(&path)?;

        log::info!("================== Saving model ==================");
        log::info!("{} has been saved in {}", self.model_name, path.display());
        Ok(())
    }
}
