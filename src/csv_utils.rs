//! Reading the command log and writing the transaction listing as CSV.
//!
//! Input fields are trimmed, so `add, 1 ,10,EUR,...` parses like `add,1,10,EUR,...`.
//! Both sides carry a header row.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Lazily deserializes every row of the file at `path` after the header.
///
/// Opening the file fails eagerly; per-row parse errors are yielded by the iterator.
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    Ok(reader.into_deserialize())
}

/// Serializes `rows` to `writer`, header first, and flushes.
pub fn write_csv<T, W>(writer: W, rows: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
