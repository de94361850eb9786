use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::aggregate::{self, AggregateViews};
use crate::clean::{self, CleaningSummary};
use crate::enrich;
use crate::error::Result;
use crate::normalize;
use crate::outliers::{self, OutlierReport};
use crate::stats;
use crate::timestamps;

/// Everything one run computes: the cleaned table, the grouped views, the
/// outlier subset and the balance/spend correlation.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub table: DataFrame,
    pub cleaning: CleaningSummary,
    pub views: AggregateViews,
    pub outliers: Option<OutlierReport>,
    pub correlation_solde_depense: Option<f64>,
}

pub fn analyze_file(path: &Path) -> Result<Analysis> {
    let content = std::fs::read(path)?;
    analyze_bytes(&content)
}

pub fn analyze_bytes(content: &[u8]) -> Result<Analysis> {
    let sheet = caisse_reader::read_sheet(content)?;
    info!(
        format = sheet.source_format,
        rows = sheet.df.height(),
        "sheet loaded"
    );

    let mut df = sheet.df;
    normalize::normalize_column_names(&mut df)?;
    normalize::ensure_expected_schema(&df)?;
    timestamps::unify_settlement_timestamp(&mut df)?;
    enrich::add_calendar_columns(&mut df)?;
    enrich::coerce_finance_columns(&mut df)?;

    let cleaned = clean::clean(&df)?;
    info!(
        rows_in = cleaned.summary.rows_in,
        missing_dropped = cleaned.summary.rows_missing_dropped,
        duplicates_dropped = cleaned.summary.duplicate_rows_dropped,
        retained = cleaned.summary.rows_retained,
        "table cleaned"
    );

    let views = aggregate::compute_views(&cleaned.df)?;

    let outlier_report = outliers::detect(&cleaned.df)?;
    if let Some(report) = &outlier_report {
        debug!(
            lower = report.lower_bound,
            upper = report.upper_bound,
            flagged = report.outliers.height(),
            "outlier fences computed"
        );
    }

    let correlation_solde_depense = correlation_solde_depense(&cleaned.df)?;

    Ok(Analysis {
        table: cleaned.df,
        cleaning: cleaned.summary,
        views,
        outliers: outlier_report,
        correlation_solde_depense,
    })
}

fn correlation_solde_depense(df: &DataFrame) -> Result<Option<f64>> {
    let soldes = df.column("solde_cpp")?.f64()?.to_vec();
    let montants = df.column("montant_rgl")?.f64()?.to_vec();
    Ok(stats::pearson(&soldes, &montants))
}
