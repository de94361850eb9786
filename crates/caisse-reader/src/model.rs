use polars::prelude::DataFrame;

/// A spreadsheet decoded into tabular form, before any normalization.
///
/// Every column is a string column; cell-level typing (numbers, timestamps)
/// is the downstream pipeline's job. Empty and error cells are nulls.
#[derive(Debug, Clone)]
pub struct RawSheet {
    pub source_format: &'static str,
    pub df: DataFrame,
}
