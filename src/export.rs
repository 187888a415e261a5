//! CSV export of a sheet's transactions.
//!
//! One row per transaction, in the sheet's stored order. Fields containing
//! delimiters, quotes or newlines are quoted per RFC 4180 by the `csv`
//! writer.

use crate::fs;
use crate::model::Sheet;
use crate::Result;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

const HEADERS: [&str; 4] = ["Date", "Description", "Amount", "Type"];

/// Date column format: the UTC calendar date, no time component.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Writes the `Date,Description,Amount,Type` header followed by one row per
/// transaction. Amounts are written with their stored scale, e.g. `100`.
pub fn write_csv<W: Write>(sheet: &Sheet, writer: W) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(HEADERS)
        .context("Unable to write the CSV header row")?;
    for txn in sheet.transactions() {
        w.write_record([
            txn.date().format(DATE_FORMAT).to_string(),
            txn.description().to_string(),
            txn.amount().value().to_string(),
            txn.kind().label().to_string(),
        ])
        .with_context(|| format!("Unable to write the CSV row for transaction {}", txn.id()))?;
    }
    w.flush().context("Unable to flush the CSV writer")?;
    Ok(())
}

/// Exports a sheet to a CSV file at `path`. On failure the in-memory sheet is
/// unaffected; the error carries the path context.
pub fn export_csv(sheet: &Sheet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = fs::file(path)?;
    write_csv(sheet, file).with_context(|| {
        format!(
            "Unable to export sheet '{}' to {}",
            sheet.name(),
            path.display()
        )
    })
}
