mod args;

use args::Args;
use clap::Parser;
use log::LevelFilter;
use preprocess::{remove_symbols, ContractionTable, SymbolPattern};
use simplelog::{Config, SimpleLogger};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let pattern = SymbolPattern::new(&args.pattern)?;
    log::info!("Stripping symbols matched by {}", pattern.as_str());

    let stripped = remove_symbols(&args.text, &pattern)?;
    println!("{}", stripped);

    if !args.tokens.is_empty() {
        let table = ContractionTable::english();
        let expanded: Vec<&str> = table
            .expand_all(args.tokens.iter().map(String::as_str))
            .collect();
        println!("{}", expanded.join(" "));
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    SimpleLogger::init(LevelFilter::Info, Config::default())?;

    Ok(args)
}
