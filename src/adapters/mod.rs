// Adapters layer: concrete implementations for external systems (flat files, local storage).

pub mod inventory_file;
pub mod order_file;
pub mod recipe_file;
pub mod storage;

use csv::{ReaderBuilder, StringRecord, Trim};

/// Reader for the comma-separated flat files: no header, no quoting, variable field
/// counts, whitespace trimmed from every field.
pub(crate) fn flat_file_reader(data: &[u8]) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(data)
}

/// A line holding nothing but whitespace.
pub(crate) fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}

/// A `#` line, including one indented with whitespace.
pub(crate) fn is_comment(record: &StringRecord) -> bool {
    record.get(0).is_some_and(|first| first.starts_with('#'))
}

pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
