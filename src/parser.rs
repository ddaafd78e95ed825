//! CSV parser turning a downloaded fuel log into a [`RawTable`].

use anyhow::Result;
use csv::{ReaderBuilder, Trim};

use crate::table::RawTable;

/// Parses CSV bytes with a header row into a [`RawTable`].
///
/// Rows may have fewer or more cells than the header; cells are trimmed.
/// A row of empty cells (`,,,`) is kept; only lines with no content at all
/// are skipped.
///
/// # Errors
///
/// Returns an error if the bytes are not readable as CSV (e.g. invalid UTF-8).
pub fn parse_table(bytes: &[u8]) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let headers = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(headers, rows))
}
