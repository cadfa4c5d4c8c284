pub mod chart;
pub mod checkpoint;
pub mod config;
pub mod dataset;
pub mod error;
pub mod history;
pub mod lifecycle;
pub mod record;
pub mod registry;

pub use chart::{ChartRenderer, Series};
pub use checkpoint::{Checkpoint, CheckpointSaver, EpochHook};
pub use config::Settings;
pub use dataset::{count_labels, count_labels_in_file, LabelTally, TextEncoding};
pub use error::{Error, Result};
pub use history::{EpochMetrics, MetricHistory};
pub use lifecycle::{train_model, TextMatchModel};
pub use record::TrainingRecorder;
pub use registry::{DatasetParams, DatasetRegistry};
