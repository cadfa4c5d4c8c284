use crate::error::{Error, Result};

/// Metrics reported for a single epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochMetrics {
    pub acc: f64,
    pub loss: f64,
    pub val_acc: f64,
    pub val_loss: f64,
}

/// Per-epoch training and validation metrics. All four series always have
/// the same length; epoch numbers start at 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricHistory {
    acc: Vec<f64>,
    loss: Vec<f64>,
    val_acc: Vec<f64>,
    val_loss: Vec<f64>,
}

impl MetricHistory {
    pub fn new(
        acc: Vec<f64>,
        loss: Vec<f64>,
        val_acc: Vec<f64>,
        val_loss: Vec<f64>,
    ) -> Result<Self> {
        let expected = acc.len();
        for (what, len) in [
            ("loss", loss.len()),
            ("val_acc", val_acc.len()),
            ("val_loss", val_loss.len()),
        ] {
            if len != expected {
                return Err(Error::LengthMismatch {
                    what,
                    expected,
                    actual: len,
                });
            }
        }

        Ok(Self {
            acc,
            loss,
            val_acc,
            val_loss,
        })
    }

    pub fn push(&mut self, metrics: EpochMetrics) {
        self.acc.push(metrics.acc);
        self.loss.push(metrics.loss);
        self.val_acc.push(metrics.val_acc);
        self.val_loss.push(metrics.val_loss);
    }

    pub fn len(&self) -> usize {
        self.acc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acc.is_empty()
    }

    pub fn acc(&self) -> &[f64] {
        &self.acc
    }

    pub fn loss(&self) -> &[f64] {
        &self.loss
    }

    pub fn val_acc(&self) -> &[f64] {
        &self.val_acc
    }

    pub fn val_loss(&self) -> &[f64] {
        &self.val_loss
    }

    /// Epoch numbers `1..=len` as chart x values.
    pub fn epoch_axis(&self) -> Vec<f64> {
        (1..=self.len()).map(|epoch| epoch as f64).collect()
    }

    /// Yields `(epoch, metrics)` with 1-indexed epochs.
    pub fn epochs(&self) -> impl Iterator<Item = (usize, EpochMetrics)> + '_ {
        (0..self.len()).map(move |i| {
            (
                i + 1,
                EpochMetrics {
                    acc: self.acc[i],
                    loss: self.loss[i],
                    val_acc: self.val_acc[i],
                    val_loss: self.val_loss[i],
                },
            )
        })
    }
}

impl FromIterator<EpochMetrics> for MetricHistory {
    fn from_iter<I: IntoIterator<Item = EpochMetrics>>(iter: I) -> Self {
        let mut history = MetricHistory::default();
        for metrics in iter {
            history.push(metrics);
        }
        history
    }
}
