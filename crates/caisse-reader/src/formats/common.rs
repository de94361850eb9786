use polars::prelude::*;

use crate::errors::ReaderError;
use crate::model::RawSheet;

/// Assembles header names and per-column cell vectors into an all-string frame.
///
/// Header cells that are empty get a positional placeholder so the frame
/// always has addressable, unique-enough names for downstream lookups.
pub(crate) fn build_sheet(
    reader: &'static str,
    headers: Vec<Option<String>>,
    columns: Vec<Vec<Option<String>>>,
) -> Result<RawSheet, ReaderError> {
    let row_count = columns.first().map(Vec::len).unwrap_or(0);
    if row_count == 0 {
        return Err(ReaderError::EmptyData { reader });
    }

    let mut cols: Vec<Column> = Vec::with_capacity(columns.len());
    for (idx, values) in columns.iter().enumerate() {
        if values.len() != row_count {
            return Err(ReaderError::Sheet {
                reader,
                message: format!(
                    "column {idx} had {} rows, expected {row_count}",
                    values.len()
                ),
            });
        }

        let name = match headers.get(idx).and_then(|h| h.as_deref()) {
            Some(name) => name.to_string(),
            None => format!("column_{idx}"),
        };

        let utf8: Vec<Option<&str>> = values.iter().map(|v| v.as_deref()).collect();
        cols.push(Series::new(name.into(), utf8).into());
    }

    let df = DataFrame::new(cols).map_err(|err| ReaderError::Sheet {
        reader,
        message: format!("failed to build sheet dataframe: {err}"),
    })?;

    Ok(RawSheet {
        source_format: reader,
        df,
    })
}

pub(crate) fn clean_cell(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
