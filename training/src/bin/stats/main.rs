mod args;

use args::Args;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use std::error::Error;
use training::dataset::{count_labels_in_file, report, TextEncoding};
use training::registry::{DatasetParams, DatasetRegistry};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let encoding: TextEncoding = args.encoding.parse()?;
    let registry = DatasetRegistry::new(&args.data_dir);

    let datasets = args
        .datasets
        .iter()
        .map(|name| registry.get(name))
        .collect::<Result<Vec<DatasetParams>, _>>()?;

    let num_files = datasets.len() * 4;
    let progress_bar = ProgressBar::new(num_files as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template(" {spinner:.cyan} {pos}/{len} [{wide_bar:.cyan/blue}] | {msg}")?,
    );

    for dataset in &datasets {
        for (split, path) in dataset.splits() {
            progress_bar.set_message(format!("{} {}", dataset.name, split));

            if !path.exists() {
                log::warn!(
                    "Skipping missing {} split of {}: {}",
                    split,
                    dataset.name,
                    path.display()
                );
                progress_bar.inc(1);
                continue;
            }

            let tally = count_labels_in_file(path, encoding)?;
            progress_bar.suspend(|| report(path, &tally));
            progress_bar.inc(1);
        }
    }

    progress_bar.finish_with_message("done");
    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    SimpleLogger::init(LevelFilter::Info, Config::default())?;

    Ok(args)
}
