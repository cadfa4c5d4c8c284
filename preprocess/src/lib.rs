pub mod contractions;
pub mod symbols;

pub use contractions::ContractionTable;
pub use symbols::{remove_symbols, StripError, SymbolPattern};
