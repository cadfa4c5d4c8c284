use clap::Parser;
use preprocess::symbols::SINGLE_QUOTE_PATTERN;

#[derive(Parser, Debug)]
#[command(name = "Symbol Stripper")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Text to strip symbols from.
    #[arg(long, default_value = "I don't like 'Random Number' at all")]
    pub text: String,

    /// Regex with exactly one capturing group around the symbol to delete.
    #[arg(long, default_value = SINGLE_QUOTE_PATTERN)]
    pub pattern: String,

    /// Tokens to expand through the contraction table.
    pub tokens: Vec<String>,
}
