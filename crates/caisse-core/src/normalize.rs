use polars::prelude::*;

use crate::error::{PipelineError, Result};

/// Columns the rest of the pipeline depends on, post-normalization.
pub const EXPECTED_COLUMNS: [&str; 9] = [
    "restaurant",
    "id_client",
    "id_user",
    "date_reglement",
    "heure_reglement",
    "montant_rgl",
    "montant_verse",
    "montant_rst",
    "solde_cpp",
];

/// Rewrites every column name to its canonical form: trimmed, lowercase,
/// spaces as underscores, French accents stripped.
pub fn normalize_column_names(df: &mut DataFrame) -> PolarsResult<()> {
    let renames: Vec<(String, String)> = df
        .get_column_names_str()
        .iter()
        .map(|name| (name.to_string(), normalize_name(name)))
        .collect();

    for (old, new) in renames {
        if old != new {
            df.rename(&old, new.into())?;
        }
    }

    Ok(())
}

/// A missing expected column is unrecoverable: every downstream stage keys on
/// this schema, so fail up front with the column name instead of surfacing an
/// incidental lookup error later.
pub fn ensure_expected_schema(df: &DataFrame) -> Result<()> {
    for column in EXPECTED_COLUMNS {
        if df.column(column).is_err() {
            return Err(PipelineError::Schema(column.to_string()));
        }
    }
    Ok(())
}

pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('é', "e")
        .replace('è', "e")
        .replace('ê', "e")
        .replace('à', "a")
}
