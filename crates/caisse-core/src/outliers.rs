use polars::prelude::*;

use crate::stats;

const IQR_FENCE: f64 = 1.5;

#[derive(Debug, Clone)]
pub struct OutlierReport {
    pub q1: f64,
    pub q3: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub outliers: DataFrame,
    pub par_client: DataFrame,
    pub par_restaurant: DataFrame,
    pub par_heure: DataFrame,
}

/// Flags settlements outside the Tukey fences of `montant_rgl` and counts the
/// flagged subset by client, restaurant and hour. A record is an outlier only
/// strictly outside the fences. Returns `None` when the table has no amounts
/// to take quantiles over.
pub fn detect(df: &DataFrame) -> PolarsResult<Option<OutlierReport>> {
    let amounts: Vec<f64> = df
        .column("montant_rgl")?
        .f64()?
        .into_iter()
        .flatten()
        .collect();

    let (Some(q1), Some(q3)) = (
        stats::quantile(&amounts, 0.25),
        stats::quantile(&amounts, 0.75),
    ) else {
        return Ok(None);
    };

    let iqr = q3 - q1;
    let lower_bound = q1 - IQR_FENCE * iqr;
    let upper_bound = q3 + IQR_FENCE * iqr;

    let outliers = df
        .clone()
        .lazy()
        .filter(
            col("montant_rgl")
                .lt(lit(lower_bound))
                .or(col("montant_rgl").gt(lit(upper_bound))),
        )
        .collect()?;

    let par_client = count_by(&outliers, "id_client")?;
    let par_restaurant = count_by(&outliers, "restaurant")?;
    let par_heure = count_by(&outliers, "heure")?;

    Ok(Some(OutlierReport {
        q1,
        q3,
        lower_bound,
        upper_bound,
        outliers,
        par_client,
        par_restaurant,
        par_heure,
    }))
}

fn count_by(outliers: &DataFrame, key: &str) -> PolarsResult<DataFrame> {
    outliers
        .clone()
        .lazy()
        .group_by_stable([col(key)])
        .agg([col("montant_rgl").count().alias("nb_anomalies")])
        .sort([key], SortMultipleOptions::default().with_maintain_order(true))
        .collect()
}
