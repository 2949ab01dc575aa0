use serde::{Deserialize, Serialize};

use super::error::ImportError;

/// Header row plus data rows exactly as they appeared in the file.
///
/// Row lengths are not checked against the header; consumers must tolerate
/// short rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Tokenize CSV text. Blank lines are skipped, the first remaining
    /// record is the header, and every other record is kept in order.
    ///
    /// The delimiter is guessed from the first non-blank line.
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let delimiter = detect_delimiter(text);

        if let Some(message) = quoting_error(text, delimiter) {
            return Err(ImportError::ParseError(message));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter as u8)
            .from_reader(text.as_bytes());

        let mut records = Vec::new();
        for result in reader.records() {
            // First diagnostic only
            let record = result.map_err(|e| ImportError::ParseError(e.to_string()))?;
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }
            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let mut records = records.into_iter();
        let headers = records.next().ok_or(ImportError::EmptyFile)?;

        Ok(Self {
            headers,
            rows: records.collect(),
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Comma first so it wins ties.
const DELIMITER_CANDIDATES: [char; 4] = [',', '\t', '|', ';'];

/// Pick the candidate that occurs most often outside quotes on the first
/// non-blank line. Falls back to a comma.
fn detect_delimiter(text: &str) -> char {
    let line = text
        .split('\n')
        .map(|l| l.trim_end_matches('\r'))
        .find(|l| !l.is_empty())
        .unwrap_or_default();

    let mut counts = [0usize; DELIMITER_CANDIDATES.len()];
    let mut in_quotes = false;
    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if !in_quotes {
            if let Some(i) = DELIMITER_CANDIDATES.iter().position(|&c| c == ch) {
                counts[i] += 1;
            }
        }
    }

    let mut best = 0;
    for i in 1..counts.len() {
        if counts[i] > counts[best] {
            best = i;
        }
    }
    DELIMITER_CANDIDATES[best]
}

#[derive(Clone, Copy, PartialEq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// First structural quoting problem, with its 1-based record number.
///
/// Only a quote at the very start of a field opens a quoted field, so
/// `5" screen` stays literal text. A closing quote must be followed by a
/// delimiter or a line break.
fn quoting_error(text: &str, delimiter: char) -> Option<String> {
    let mut state = QuoteState::FieldStart;
    let mut row = 1;
    let mut opened_at = row;

    for ch in text.chars() {
        state = match (state, ch) {
            (QuoteState::FieldStart, '"') => {
                opened_at = row;
                QuoteState::Quoted
            }
            (QuoteState::Quoted, '"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, '\n') => {
                row += 1;
                QuoteState::Quoted
            }
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, '"') => QuoteState::Quoted,
            (_, c) if c == delimiter => QuoteState::FieldStart,
            (_, '\n') => {
                row += 1;
                QuoteState::FieldStart
            }
            (QuoteState::FieldStart, '\r') => QuoteState::FieldStart,
            (QuoteState::QuoteInQuoted, '\r') => QuoteState::QuoteInQuoted,
            (QuoteState::QuoteInQuoted, _) => {
                return Some(format!(
                    "Trailing quote on quoted field is malformed at row {}",
                    row
                ));
            }
            _ => QuoteState::Unquoted,
        };
    }

    (state == QuoteState::Quoted)
        .then(|| format!("Quoted field unterminated at row {}", opened_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_rows() {
        let table = RawTable::parse("sku,name\nA1,Tee\nB2,Jeans\n").unwrap();
        assert_eq!(table.headers, vec!["sku", "name"]);
        assert_eq!(table.rows, vec![vec!["A1", "Tee"], vec!["B2", "Jeans"]]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = RawTable::parse("\n\nsku,name\n\nA1,Tee\n\n\nB2,Jeans\n\n").unwrap();
        assert_eq!(table.headers, vec!["sku", "name"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_ragged_rows_kept() {
        let table = RawTable::parse("sku,name,category\nA1\nB2,Jeans,Bottoms,extra\n").unwrap();
        assert_eq!(table.rows[0], vec!["A1"]);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn test_quoted_fields() {
        let table =
            RawTable::parse("sku,name\nA1,\"Tee, \"\"Black\"\"\"\nB2,\"two\nlines\"\n").unwrap();
        assert_eq!(table.rows[0][1], "Tee, \"Black\"");
        assert_eq!(table.rows[1][1], "two\nlines");
    }

    #[test]
    fn test_crlf_and_bom() {
        let table = RawTable::parse("\u{feff}sku,name\r\nA1,Tee\r\n").unwrap();
        assert_eq!(table.headers, vec!["sku", "name"]);
        assert_eq!(table.rows, vec![vec!["A1", "Tee"]]);
    }

    #[test]
    fn test_header_only() {
        let table = RawTable::parse("sku,name\n").unwrap();
        assert_eq!(table.headers, vec!["sku", "name"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(RawTable::parse(""), Err(ImportError::EmptyFile));
        assert_eq!(RawTable::parse("\n\r\n\n"), Err(ImportError::EmptyFile));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = RawTable::parse("sku,name\nA1,Tee\nB2,\"Jeans\nC3,Dress\n").unwrap_err();
        assert_eq!(
            err,
            ImportError::ParseError("Quoted field unterminated at row 3".into())
        );
    }

    #[test]
    fn test_inner_quote_is_literal() {
        let table = RawTable::parse("sku,name\nTV1,27\" screen\n").unwrap();
        assert_eq!(table.rows[0][1], "27\" screen");
    }

    #[test]
    fn test_trailing_quote_malformed() {
        let err = RawTable::parse("sku,name\nA1,\"Tee\"x\n").unwrap_err();
        assert_eq!(
            err,
            ImportError::ParseError("Trailing quote on quoted field is malformed at row 2".into())
        );
    }

    #[test]
    fn test_semicolon_delimiter() {
        let table = RawTable::parse("sku;name;available\nA1;\"Tee; black\";4\n").unwrap();
        assert_eq!(table.headers, vec!["sku", "name", "available"]);
        assert_eq!(table.rows, vec![vec!["A1", "Tee; black", "4"]]);
    }

    #[test]
    fn test_tab_delimiter() {
        let table = RawTable::parse("\nsku\tname\r\nA1\tTee, black\r\n").unwrap();
        assert_eq!(table.headers, vec!["sku", "name"]);
        assert_eq!(table.rows, vec![vec!["A1", "Tee, black"]]);
    }

    #[test]
    fn test_comma_wins_delimiter_tie() {
        let table = RawTable::parse("sku,name;x\nA1,Tee;y\n").unwrap();
        assert_eq!(table.headers, vec!["sku", "name;x"]);
    }
}
