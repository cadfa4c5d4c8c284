use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

/// Quotes wrapping a phrase, e.g. `I like 'Random Number' a lot`.
/// Apostrophes inside words (`don't`) are left alone.
pub const SINGLE_QUOTE_PATTERN: &str = r"(?:^|\s)(')[^'\s][^']*'(?:\s|$|[.,!?;:])";

/// Thousands separators inside numbers, e.g. `1,234,567`.
pub const NUMBER_COMMA_PATTERN: &str = r"\d(,)\d{3}";

#[derive(Debug, Error)]
pub enum StripError {
    #[error("invalid symbol pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("symbol pattern must have exactly one capturing group, found {0}")]
    GroupCount(usize),
    #[error("captured symbol is empty at byte {position}")]
    EmptySymbol { position: usize },
    #[error("symbol stripping made no progress after {passes} passes")]
    NoProgress { passes: usize },
}

/// A regex whose single capturing group marks the symbol to delete
/// from every span the whole pattern matches.
#[derive(Debug, Clone)]
pub struct SymbolPattern {
    regex: Regex,
}

impl SymbolPattern {
    pub fn new(pattern: &str) -> Result<Self, StripError> {
        let regex = Regex::new(pattern)?;

        // captures_len counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(StripError::GroupCount(groups));
        }

        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl FromStr for SymbolPattern {
    type Err = StripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Repeatedly finds the first match of `pattern` in `seq`, deletes the
/// captured symbol from inside the matched span and splices the span back,
/// until nothing matches.
///
/// Every pass removes at least one character, so the loop is bounded by the
/// input length. A match whose symbol group is empty or did not take part
/// in the match can never shrink the input and fails with
/// [`StripError::EmptySymbol`].
pub fn remove_symbols(seq: &str, pattern: &SymbolPattern) -> Result<String, StripError> {
    let mut seq = seq.to_string();
    let max_passes = seq.len() + 1;

    for _ in 0..max_passes {
        let Some(caps) = pattern.regex.captures(&seq) else {
            return Ok(seq);
        };

        let (Some(span), Some(symbol)) = (caps.get(0), caps.get(1)) else {
            let position = caps.get(0).map_or(0, |m| m.start());
            return Err(StripError::EmptySymbol { position });
        };
        if symbol.is_empty() {
            return Err(StripError::EmptySymbol {
                position: span.start(),
            });
        }

        let range = span.range();
        let stripped = span.as_str().replace(symbol.as_str(), "");
        seq.replace_range(range, &stripped);
    }

    Err(StripError::NoProgress { passes: max_passes })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(seq: &str, pattern: &str) -> String {
        let pattern = SymbolPattern::new(pattern).unwrap();
        remove_symbols(seq, &pattern).unwrap()
    }

    #[test]
    fn test_strips_quotes_mid_sentence() {
        assert_eq!(
            strip("I don't like 'Random Number' at all", SINGLE_QUOTE_PATTERN),
            "I don't like Random Number at all"
        );
    }

    #[test]
    fn test_strips_quotes_at_sentence_edges() {
        assert_eq!(
            strip("'Random Number' is what I don't like at all.", SINGLE_QUOTE_PATTERN),
            "Random Number is what I don't like at all."
        );
        assert_eq!(
            strip("I don't like 'Random Number'.", SINGLE_QUOTE_PATTERN),
            "I don't like Random Number."
        );
    }

    #[test]
    fn test_strips_every_quoted_phrase() {
        assert_eq!(strip("'a' and 'b'", SINGLE_QUOTE_PATTERN), "a and b");
    }

    #[test]
    fn test_strips_number_commas_repeatedly() {
        assert_eq!(strip("1,234,567 items", NUMBER_COMMA_PATTERN), "1234567 items");
        assert_eq!(strip("pay 12,000 or 3,500", NUMBER_COMMA_PATTERN), "pay 12000 or 3500");
    }

    #[test]
    fn test_no_match_returns_input() {
        assert_eq!(strip("no quotes here", SINGLE_QUOTE_PATTERN), "no quotes here");
        assert_eq!(strip("", NUMBER_COMMA_PATTERN), "");
        // Two-digit groups are not thousands separators
        assert_eq!(strip("12,34", NUMBER_COMMA_PATTERN), "12,34");
    }

    #[test]
    fn test_result_has_no_remaining_matches() {
        let pattern = SymbolPattern::new(NUMBER_COMMA_PATTERN).unwrap();
        for input in ["1,000", "9,999,999,999", "a1,000b2,000,000c", "1,0000,000"] {
            let output = remove_symbols(input, &pattern).unwrap();
            assert!(pattern.regex.find(&output).is_none(), "{} -> {}", input, output);
        }
    }

    #[test]
    fn test_rejects_wrong_group_count() {
        assert!(matches!(SymbolPattern::new(r"\d,\d"), Err(StripError::GroupCount(0))));
        assert!(matches!(SymbolPattern::new(r"(\d)(,)"), Err(StripError::GroupCount(2))));
        // Non-capturing groups don't count
        assert!(SymbolPattern::new(r"(?:a)(b)").is_ok());
    }

    #[test]
    fn test_rejects_invalid_regex() {
        assert!(matches!(SymbolPattern::new(r"(unclosed"), Err(StripError::InvalidPattern(_))));
    }

    #[test]
    fn test_empty_symbol_fails_fast() {
        let pattern = SymbolPattern::new(r"a(x?)b").unwrap();
        assert!(matches!(
            remove_symbols("zzab", &pattern),
            Err(StripError::EmptySymbol { position: 2 })
        ));

        // Optional group that does not participate
        let pattern = SymbolPattern::new(r"a(x)?b").unwrap();
        assert!(matches!(
            remove_symbols("ab", &pattern),
            Err(StripError::EmptySymbol { position: 0 })
        ));
    }

    #[test]
    fn test_parses_from_str() {
        let pattern: SymbolPattern = NUMBER_COMMA_PATTERN.parse().unwrap();
        assert_eq!(pattern.as_str(), NUMBER_COMMA_PATTERN);
    }
}
