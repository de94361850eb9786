use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use polars::prelude::*;

/// Amount columns coerced to Float64 during enrichment.
pub const FINANCE_COLUMNS: [&str; 4] = [
    "montant_rgl",
    "montant_verse",
    "montant_rst",
    "solde_cpp",
];

/// Derives the calendar columns (`jour`, `annee`, `mois`, `semaine`, `heure`)
/// from the settlement timestamp. All five are null wherever the timestamp is.
pub fn add_calendar_columns(df: &mut DataFrame) -> PolarsResult<()> {
    let timestamps = df.column("date_reglement")?.datetime()?.clone();
    let len = df.height();

    let mut jours: Vec<Option<i32>> = Vec::with_capacity(len);
    let mut annees: Vec<Option<i32>> = Vec::with_capacity(len);
    let mut mois: Vec<Option<i32>> = Vec::with_capacity(len);
    let mut semaines: Vec<Option<i32>> = Vec::with_capacity(len);
    let mut heures: Vec<Option<i32>> = Vec::with_capacity(len);

    for idx in 0..len {
        match timestamps.get(idx).and_then(naive_from_micros) {
            Some(dt) => {
                jours.push(Some(days_from_epoch(dt.date())));
                annees.push(Some(dt.year()));
                mois.push(Some(dt.month() as i32));
                semaines.push(Some(dt.iso_week().week() as i32));
                heures.push(Some(dt.hour() as i32));
            }
            None => {
                jours.push(None);
                annees.push(None);
                mois.push(None);
                semaines.push(None);
                heures.push(None);
            }
        }
    }

    let jour_series = Series::new("jour".into(), jours).cast(&DataType::Date)?;

    df.hstack_mut(&mut [
        jour_series.into(),
        Series::new("annee".into(), annees).into(),
        Series::new("mois".into(), mois).into(),
        Series::new("semaine".into(), semaines).into(),
        Series::new("heure".into(), heures).into(),
    ])?;

    Ok(())
}

/// Coerces the four amount columns to Float64. Cells that do not parse as a
/// finite number become null; they are never an error.
pub fn coerce_finance_columns(df: &mut DataFrame) -> PolarsResult<()> {
    for column in FINANCE_COLUMNS {
        let coerced = match df.column(column)?.dtype() {
            DataType::String => {
                let raw = df.column(column)?.str()?;
                let values: Vec<Option<f64>> = (0..raw.len())
                    .map(|idx| raw.get(idx).and_then(parse_amount))
                    .collect();
                Series::new(column.into(), values)
            }
            _ => df
                .column(column)?
                .as_materialized_series()
                .cast(&DataType::Float64)?,
        };
        df.replace(column, coerced)?;
    }

    Ok(())
}

fn parse_amount(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn naive_from_micros(value: i64) -> Option<NaiveDateTime> {
    let secs = value.div_euclid(1_000_000);
    let micros = value.rem_euclid(1_000_000) as u32;
    DateTime::<Utc>::from_timestamp(secs, micros * 1_000).map(|dt| dt.naive_utc())
}

fn days_from_epoch(date: NaiveDate) -> i32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch is a valid date");
    date.signed_duration_since(epoch).num_days() as i32
}
