use chrono::{DateTime, Local};

use crate::error::Result;
use crate::history::MetricHistory;
use crate::registry::DatasetParams;

/// Test-set results reported by a model after training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub loss: f64,
    pub acc: f64,
}

/// The stages a text-matching model goes through, in the order
/// [`train_model`] calls them. `fit` is expected to call any
/// [`EpochHook`](crate::checkpoint::EpochHook)s the model was given.
pub trait TextMatchModel {
    type Hyperparams;

    fn setup(&mut self, hyperparams: &Self::Hyperparams, dataset: &DatasetParams) -> Result<()>;
    fn build(&mut self) -> Result<()>;
    fn compile(&mut self) -> Result<()>;
    fn fit(&mut self) -> Result<MetricHistory>;
    fn evaluate(&mut self) -> Result<Evaluation>;
}

#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub history: MetricHistory,
    pub evaluation: Evaluation,
    pub started: DateTime<Local>,
}

pub fn train_model<M: TextMatchModel>(
    model: &mut M,
    hyperparams: &M::Hyperparams,
    dataset: &DatasetParams,
) -> Result<TrainingOutcome> {
    log::info!("Setting up model for dataset {}", dataset.name);
    model.setup(hyperparams, dataset)?;

    log::info!("Building model");
    model.build()?;
    model.compile()?;

    let started = Local::now();
    log::info!("Training model");
    let history = model.fit()?;
    log::info!("Trained for {} epochs", history.len());

    let evaluation = model.evaluate()?;
    log::info!(
        "Test loss: {:.4}, test acc: {:.2}%",
        evaluation.loss,
        evaluation.acc * 100.0
    );

    Ok(TrainingOutcome {
        history,
        evaluation,
        started,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::history::EpochMetrics;
    use std::path::PathBuf;

    #[derive(Default)]
    struct ScriptedModel {
        calls: Vec<&'static str>,
        fail_at: Option<&'static str>,
        epochs: usize,
    }

    impl ScriptedModel {
        fn stage(&mut self, name: &'static str) -> Result<()> {
            self.calls.push(name);
            if self.fail_at == Some(name) {
                return Err(Error::Model(format!("{} failed", name)));
            }
            Ok(())
        }
    }

    impl TextMatchModel for ScriptedModel {
        type Hyperparams = usize;

        fn setup(&mut self, epochs: &usize, _dataset: &DatasetParams) -> Result<()> {
            self.epochs = *epochs;
            self.stage("setup")
        }

        fn build(&mut self) -> Result<()> {
            self.stage("build")
        }

        fn compile(&mut self) -> Result<()> {
            self.stage("compile")
        }

        fn fit(&mut self) -> Result<MetricHistory> {
            self.stage("fit")?;
            Ok((0..self.epochs)
                .map(|_| EpochMetrics {
                    acc: 0.5,
                    loss: 0.7,
                    val_acc: 0.5,
                    val_loss: 0.7,
                })
                .collect())
        }

        fn evaluate(&mut self) -> Result<Evaluation> {
            self.stage("evaluate")?;
            Ok(Evaluation { loss: 0.6, acc: 0.6 })
        }
    }

    fn dataset() -> DatasetParams {
        let root = PathBuf::from("data/cikm_en");
        DatasetParams {
            name: "cikm_en".to_string(),
            raw: root.join("raw.txt"),
            train: root.join("train.txt"),
            val: root.join("val.txt"),
            test: root.join("test.txt"),
        }
    }

    #[test]
    fn test_runs_stages_in_order() {
        let mut model = ScriptedModel::default();
        let outcome = train_model(&mut model, &3, &dataset()).unwrap();

        assert_eq!(model.calls, ["setup", "build", "compile", "fit", "evaluate"]);
        assert_eq!(outcome.history.len(), 3);
        assert_eq!(outcome.evaluation.acc, 0.6);
    }

    #[test]
    fn test_stops_at_first_failure() {
        let mut model = ScriptedModel {
            fail_at: Some("compile"),
            ..Default::default()
        };

        assert!(matches!(
            train_model(&mut model, &3, &dataset()),
            Err(Error::Model(_))
        ));
        assert_eq!(model.calls, ["setup", "build", "compile"]);
    }
}
