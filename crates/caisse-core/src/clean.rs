use std::collections::HashSet;
use std::fmt::Write as _;

use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CleaningSummary {
    pub rows_in: usize,
    pub rows_missing_dropped: usize,
    pub duplicate_rows_dropped: usize,
    pub rows_retained: usize,
}

#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub df: DataFrame,
    pub summary: CleaningSummary,
}

/// Drops rows without a settlement timestamp or settlement amount, then
/// exact full-row duplicates (first occurrence wins). Everything downstream
/// may assume `date_reglement` and `montant_rgl` are non-null.
pub fn clean(df: &DataFrame) -> PolarsResult<CleanedTable> {
    let rows_in = df.height();

    let complete = df
        .clone()
        .lazy()
        .filter(
            col("date_reglement")
                .is_not_null()
                .and(col("montant_rgl").is_not_null()),
        )
        .collect()?;
    let rows_missing_dropped = rows_in - complete.height();

    let deduped = drop_duplicate_rows(&complete)?;
    let duplicate_rows_dropped = complete.height() - deduped.height();

    let summary = CleaningSummary {
        rows_in,
        rows_missing_dropped,
        duplicate_rows_dropped,
        rows_retained: deduped.height(),
    };

    Ok(CleanedTable {
        df: deduped,
        summary,
    })
}

fn drop_duplicate_rows(df: &DataFrame) -> PolarsResult<DataFrame> {
    let columns = df.get_columns();
    let mut seen: HashSet<String> = HashSet::with_capacity(df.height());
    let mut keep: Vec<bool> = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let mut key = String::new();
        for column in columns {
            let value = column.as_materialized_series().get(idx)?;
            // Debug formatting keeps the dtype in the key, so 1i64 and "1" differ.
            write!(key, "{value:?}\u{1f}").expect("writing to a String cannot fail");
        }
        keep.push(seen.insert(key));
    }

    let mask: BooleanChunked = keep.into_iter().collect();
    df.filter(&mask)
}
