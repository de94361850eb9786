use chrono::NaiveDateTime;
use polars::prelude::*;

static DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Replaces `date_reglement` with a single Datetime column parsed from the
/// date and time cells concatenated as strings. A row whose concatenation
/// cannot be parsed (or whose date or time cell is null) gets a null
/// timestamp; per-row failures never abort the run.
pub fn unify_settlement_timestamp(df: &mut DataFrame) -> PolarsResult<()> {
    let dates = df.column("date_reglement")?.str()?.clone();
    let times = df.column("heure_reglement")?.str()?.clone();

    let mut micros: Vec<Option<i64>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let parsed = match (dates.get(idx), times.get(idx)) {
            (Some(date), Some(time)) => parse_datetime(&format!("{date} {time}")),
            _ => None,
        };
        micros.push(parsed.map(|dt| dt.and_utc().timestamp_micros()));
    }

    let series = Series::new("date_reglement".into(), micros)
        .cast(&DataType::Datetime(TimeUnit::Microseconds, None))?;
    df.replace("date_reglement", series)?;

    Ok(())
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    None
}
