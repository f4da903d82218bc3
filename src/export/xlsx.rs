//! XLSX export: a single worksheet with a bold header row.

use std::path::Path;

use std::borrow::Cow;

use anyhow::{Context, Result};
use log::warn;
use rust_xlsxwriter::{Format, Workbook};

use super::row::{flatten_record, FlatCell, COLUMNS};
use crate::models::NormalizedRecord;

const SHEET_NAME: &str = "Traffic";

/// Excel's per-cell character limit.
const MAX_CELL_CHARS: usize = 32_767;

/// Cuts `value` to the Excel cell limit. Longer values are truncated with a
/// warning instead of failing the whole workbook.
fn fit_cell<'a>(value: &'a str, domain: &str, column: &str) -> Cow<'a, str> {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        None => Cow::Borrowed(value),
        Some((cut, _)) => {
            warn!(
                "Truncating {column} for {domain} to {MAX_CELL_CHARS} characters in XLSX output"
            );
            Cow::Owned(value[..cut].to_string())
        }
    }
}

pub fn export_xlsx(records: &[NormalizedRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        let col = u16::try_from(col).context("Too many columns for XLSX")?;
        worksheet.write_string_with_format(0, col, *name, &header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = u32::try_from(index + 1).context("Too many rows for XLSX")?;
        for (col, cell) in flatten_record(record)?.iter().enumerate() {
            let col = u16::try_from(col).context("Too many columns for XLSX")?;
            match cell {
                FlatCell::Text(s) => {
                    let column = COLUMNS.get(usize::from(col)).copied().unwrap_or_default();
                    worksheet.write_string(row, col, fit_cell(s, &record.domain, column))?
                }
                // i64 ranks fit in an f64 mantissa
                FlatCell::Integer(n) => worksheet.write_number(row, col, *n as f64)?,
                FlatCell::Bool(b) => worksheet.write_boolean(row, col, *b)?,
            };
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write XLSX file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_cell_keeps_short_values() {
        assert!(matches!(fit_cell("short", "a.com", "title"), Cow::Borrowed("short")));
        let exact = "x".repeat(MAX_CELL_CHARS);
        assert_eq!(fit_cell(&exact, "a.com", "title").len(), MAX_CELL_CHARS);
    }

    #[test]
    fn test_fit_cell_truncates_on_char_boundary() {
        let long = "é".repeat(MAX_CELL_CHARS + 10);
        let cut = fit_cell(&long, "a.com", "description");
        assert_eq!(cut.chars().count(), MAX_CELL_CHARS);
    }
}
