use clap::Parser;
use training::registry::DEFAULT_DATASET;

#[derive(Parser, Debug)]
#[command(name = "Dataset Statistics")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Directory holding one subdirectory per dataset.
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Datasets to count labels for. Repeat for several.
    #[arg(long = "dataset", default_value = DEFAULT_DATASET)]
    pub datasets: Vec<String>,

    /// Text encoding of the dataset files.
    #[arg(long, default_value = "utf-8")]
    pub encoding: String,
}
