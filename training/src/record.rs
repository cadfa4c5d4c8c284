use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::chart::{ChartRenderer, Series};
use crate::config::{Settings, TRAIN_RECORD_FILE};
use crate::dataset::TextEncoding;
use crate::error::Result;
use crate::history::MetricHistory;

pub const RECORD_CHART_TITLE: &str = "acc & loss & val_acc & val_loss";

/// Appends a human-readable training report to the record file and
/// charts the metric curves next to it.
pub struct TrainingRecorder {
    save_dir: PathBuf,
    record_file_name: String,
    encoding: TextEncoding,
}

impl TrainingRecorder {
    pub fn new<P: Into<PathBuf>>(save_dir: P) -> Self {
        Self {
            save_dir: save_dir.into(),
            record_file_name: TRAIN_RECORD_FILE.to_string(),
            encoding: TextEncoding::Utf8,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            save_dir: settings.model_save_dir.clone(),
            record_file_name: settings.record_file_name.clone(),
            encoding: settings.encoding,
        }
    }

    pub fn record_path(&self) -> PathBuf {
        self.save_dir.join(&self.record_file_name)
    }

    /// Writes the report for a run that began at `started`, then renders
    /// the metric chart. Returns the chart path.
    pub fn record(
        &self,
        history: &MetricHistory,
        started: DateTime<Local>,
    ) -> Result<Option<PathBuf>> {
        let elapsed = (Local::now() - started).num_milliseconds() as f64 / 1000.0;
        let report = format_report(history, elapsed);
        append_record(&report, &self.record_path(), self.encoding)?;

        let epochs = history.epoch_axis();
        let series = [
            Series::new(&epochs, history.acc(), "acc")?,
            Series::new(&epochs, history.loss(), "loss")?,
            Series::new(&epochs, history.val_acc(), "val_acc")?,
            Series::new(&epochs, history.val_loss(), "val_loss")?,
        ];

        ChartRenderer::new(&self.save_dir).render(RECORD_CHART_TITLE, "epoch", "index", &series)
    }
}

pub fn format_report(history: &MetricHistory, elapsed_secs: f64) -> String {
    let mut report = String::new();

    report.push_str("\n========================== history ===========================\n");
    report.push_str(&format!("train acc: {:?}\n", history.acc()));
    report.push_str(&format!("train loss: {:?}\n", history.loss()));
    report.push_str(&format!("val acc: {:?}\n", history.val_acc()));
    report.push_str(&format!("val loss: {:?}\n", history.val_loss()));

    report.push_str(
        "\n======================= acc & loss & val_acc & val_loss ============================\n",
    );
    for (epoch, m) in history.epochs() {
        report.push_str(&format!(
            "epoch {:<3} | acc: {:5.2}% | loss: {:<6.4} | val_acc: {:5.2}% | val_loss: {:<6.4}\n",
            epoch,
            m.acc * 100.0,
            m.loss,
            m.val_acc * 100.0,
            m.val_loss
        ));
    }

    report.push_str("\n================ Train end ================\n");
    report.push_str(&format!("Train time: {:.2}s\n", elapsed_secs));
    report
}

/// Echoes `text` to the log and appends it to `path`, creating the parent
/// directory when missing.
pub fn append_record(text: &str, path: &Path, encoding: TextEncoding) -> Result<()> {
    log::info!("{}", text);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let bytes = encoding.encode(text)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(&bytes)?;
    Ok(())
}
