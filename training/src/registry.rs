use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_DATASET: &str = "cikm_en";
const SPLIT_FILE_EXT: &str = "txt";

/// File locations of one dataset's splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetParams {
    pub name: String,
    pub raw: PathBuf,
    pub train: PathBuf,
    pub val: PathBuf,
    pub test: PathBuf,
}

impl DatasetParams {
    pub fn splits(&self) -> [(&'static str, &Path); 4] {
        [
            ("raw", self.raw.as_path()),
            ("train", self.train.as_path()),
            ("val", self.val.as_path()),
            ("test", self.test.as_path()),
        ]
    }
}

/// Datasets laid out as `<root>/<name>/{raw,train,val,test}.txt`.
pub struct DatasetRegistry {
    root_path: PathBuf,
}

impl DatasetRegistry {
    pub fn new<P: Into<PathBuf>>(root_path: P) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    pub fn available(&self) -> io::Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root_path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort_unstable();
        Ok(names)
    }

    pub fn dataset_path(&self, name: &str) -> PathBuf {
        self.root_path.join(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dataset_path(name).is_dir()
    }

    pub fn get(&self, name: &str) -> Result<DatasetParams> {
        let path = self.dataset_path(name);
        if !path.is_dir() {
            return Err(Error::UnknownDataset {
                name: name.to_string(),
                path,
            });
        }

        let split = |split: &str| path.join(format!("{}.{}", split, SPLIT_FILE_EXT));
        Ok(DatasetParams {
            name: name.to_string(),
            raw: split("raw"),
            train: split("train"),
            val: split("val"),
            test: split("test"),
        })
    }
}
