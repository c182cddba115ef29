//! Comma-separated dependency records.
//!
//! The first record is a header and is always skipped. Fields are split on
//! `,` with no quoting; spaces at the start of each field are dropped and the
//! remaining text is used verbatim as a step name. Blank lines are ignored,
//! and fields after the second are ignored.

use std::io::BufRead;

use crate::graph::DependencyPair;

use super::LoadError;

/// Read dependency pairs from a stream of CSV records.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when a line cannot be read and
/// [`LoadError::MalformedRecord`] when a record has fewer than two fields.
///
/// # Examples
///
/// ```
/// use construction::loader::from_csv_reader;
///
/// let input = "before,after\nfoundation, walls\n";
/// let pairs = from_csv_reader(input.as_bytes()).expect("valid records");
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].successor, "walls");
/// ```
pub fn from_csv_reader(reader: impl BufRead) -> Result<Vec<DependencyPair>, LoadError> {
    let mut pairs = Vec::new();
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let raw = line.map_err(|source| LoadError::Io {
            line: line_no,
            source,
        })?;
        if let Some(pair) = parse_record(&raw, line_no)? {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

/// Read dependency pairs from an in-memory CSV document.
///
/// # Errors
///
/// Returns [`LoadError::MalformedRecord`] when a record has fewer than two
/// fields.
pub fn from_csv_str(input: &str) -> Result<Vec<DependencyPair>, LoadError> {
    from_csv_reader(input.as_bytes())
}

fn parse_record(raw: &str, line: usize) -> Result<Option<DependencyPair>, LoadError> {
    let record = raw.strip_suffix('\r').unwrap_or(raw);
    if record.is_empty() {
        return Ok(None);
    }
    let mut fields = record.split(',').map(|field| field.trim_start_matches(' '));
    match (fields.next(), fields.next()) {
        (Some(predecessor), Some(successor)) => {
            Ok(Some(DependencyPair::new(predecessor, successor)))
        }
        _ => Err(LoadError::MalformedRecord { line, fields: 1 }),
    }
}
