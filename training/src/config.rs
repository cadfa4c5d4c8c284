use std::path::PathBuf;

use crate::dataset::TextEncoding;

pub const MODEL_SAVE_DIR: &str = "models";
pub const TRAIN_RECORD_FILE: &str = "train_record.txt";
pub const MODEL_NAME: &str = "text-match";

/// Where training artifacts go and how text files are written.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory for checkpoints, the training record and charts.
    pub model_save_dir: PathBuf,
    pub record_file_name: String,
    pub encoding: TextEncoding,
    /// Shown in checkpoint notices.
    pub model_name: String,
}

impl Settings {
    pub fn record_path(&self) -> PathBuf {
        self.model_save_dir.join(&self.record_file_name)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_save_dir: PathBuf::from(MODEL_SAVE_DIR),
            record_file_name: TRAIN_RECORD_FILE.to_string(),
            encoding: TextEncoding::Utf8,
            model_name: MODEL_NAME.to_string(),
        }
    }
}
