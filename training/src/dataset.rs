use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

const FIELDS_PER_RECORD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl TextEncoding {
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    pub fn decode(self, bytes: &[u8]) -> io::Result<String> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    pub fn encode(self, text: &str) -> io::Result<Vec<u8>> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("'{}' is not representable in latin-1", c),
                        )
                    })
                })
                .collect(),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(Error::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Positive/negative label distribution of a dataset file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelTally {
    pub total: u64,
    pub positive: u64,
    pub negative: u64,
}

impl LabelTally {
    // Returns if the label was counted
    pub fn record(&mut self, label: i64) -> bool {
        match label {
            1 => self.positive += 1,
            0 => self.negative += 1,
            _ => return false,
        }
        self.total += 1;
        true
    }
}

impl fmt::Display for LabelTally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "total count: {}", self.total)?;
        writeln!(f, "positive count: {}", self.positive)?;
        write!(f, "negative count: {}", self.negative)
    }
}

/// Tallies `text\ttext\tlabel` records. Blank lines, lines without exactly
/// three fields and labels other than 0 or 1 are skipped.
pub fn count_labels<R: BufRead>(mut reader: R, encoding: TextEncoding) -> io::Result<LabelTally> {
    let mut tally = LabelTally::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = encoding.decode(&buf)?;
        if let Some(label) = parse_label(&line) {
            tally.record(label);
        }
    }

    Ok(tally)
}

pub fn count_labels_in_file<P: AsRef<Path>>(
    path: P,
    encoding: TextEncoding,
) -> io::Result<LabelTally> {
    let file = File::open(path)?;
    count_labels(BufReader::new(file), encoding)
}

/// Logs the tally under the file name of `path`.
pub fn report(path: &Path, tally: &LabelTally) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    log::info!("========== {} ==========", name);
    for line in tally.to_string().lines() {
        log::info!("{}", line);
    }
}

fn parse_label(line: &str) -> Option<i64> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != FIELDS_PER_RECORD {
        return None;
    }

    fields[FIELDS_PER_RECORD - 1].trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn count(text: &str) -> LabelTally {
        count_labels(Cursor::new(text.as_bytes()), TextEncoding::Utf8).unwrap()
    }

    #[test]
    fn test_skips_malformed_and_out_of_range() {
        let tally = count("a\tb\t1\nc\td\t0\nbad\tline\n\ne\tf\t9\n");
        assert_eq!(
            tally,
            LabelTally {
                total: 2,
                positive: 1,
                negative: 1
            }
        );
    }

    #[test]
    fn test_skips_unparseable_labels_and_extra_fields() {
        let tally = count("a\tb\tyes\na\tb\t1\tx\na\tb\t\n\t\t1\n");
        // Only the last line has three fields and an integer label
        assert_eq!(tally.total, 1);
        assert_eq!(tally.positive, 1);
    }

    #[test]
    fn test_handles_crlf_and_missing_trailing_newline() {
        let tally = count("q1\tq2\t1\r\n   \r\nq3\tq4\t0");
        assert_eq!(tally.total, 2);
        assert_eq!(tally.positive, 1);
        assert_eq!(tally.negative, 1);
    }

    #[test]
    fn test_total_is_sum_of_counts() {
        let text: String = (0..50).map(|i| format!("x\ty\t{}\n", i % 3)).collect();
        let tally = count(&text);
        assert_eq!(tally.total, tally.positive + tally.negative);
        assert_eq!(tally.positive, 17);
        assert_eq!(tally.negative, 17);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"a\tb\t1\n\xff\xfe\t\t0\n";
        let err = count_labels(Cursor::new(bytes), TextEncoding::Utf8).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        // Any byte is valid latin-1
        let tally = count_labels(Cursor::new(bytes), TextEncoding::Latin1).unwrap();
        assert_eq!(tally.total, 2);
    }

    #[test]
    fn test_parses_encoding_labels() {
        assert_eq!("UTF-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("utf8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("ISO-8859-1".parse::<TextEncoding>().unwrap(), TextEncoding::Latin1);
        assert!(matches!(
            "gbk".parse::<TextEncoding>(),
            Err(Error::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_latin1_round_trip_rejects_wide_chars() {
        assert_eq!(TextEncoding::Latin1.encode("café").unwrap(), b"caf\xe9");
        assert!(TextEncoding::Latin1.encode("日本").is_err());
    }

    #[test]
    fn test_tally_display() {
        let tally = LabelTally {
            total: 3,
            positive: 2,
            negative: 1,
        };
        assert_eq!(
            tally.to_string(),
            "total count: 3\npositive count: 2\nnegative count: 1"
        );
    }
}
