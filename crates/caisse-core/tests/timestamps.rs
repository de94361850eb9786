use caisse_core::timestamps::unify_settlement_timestamp;
use chrono::NaiveDate;
use polars::prelude::*;

fn string_frame(
    dates: Vec<Option<&str>>,
    times: Vec<Option<&str>>,
) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Series::new("date_reglement".into(), dates).into(),
        Series::new("heure_reglement".into(), times).into(),
    ])
}

fn micros(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
        .and_utc()
        .timestamp_micros()
}

#[test]
fn combined_date_and_time_parse_to_a_datetime_column() -> PolarsResult<()> {
    let mut df = string_frame(
        vec![Some("2024-03-01"), Some("01/03/2024"), Some("2024-03-01")],
        vec![Some("12:30:00"), Some("08:15"), Some("not a time")],
    )?;

    unify_settlement_timestamp(&mut df)?;

    let parsed = df.column("date_reglement")?.datetime()?;
    assert_eq!(parsed.get(0), Some(micros(2024, 3, 1, 12, 30, 0)));
    assert_eq!(parsed.get(1), Some(micros(2024, 3, 1, 8, 15, 0)));
    assert_eq!(parsed.get(2), None);
    Ok(())
}

#[test]
fn null_date_or_time_yields_a_null_timestamp() -> PolarsResult<()> {
    let mut df = string_frame(
        vec![None, Some("2024-03-01"), Some("2024-03-01")],
        vec![Some("12:30:00"), None, Some("23:59:59")],
    )?;

    unify_settlement_timestamp(&mut df)?;

    let parsed = df.column("date_reglement")?.datetime()?;
    assert_eq!(parsed.get(0), None);
    assert_eq!(parsed.get(1), None);
    assert_eq!(parsed.get(2), Some(micros(2024, 3, 1, 23, 59, 59)));
    Ok(())
}

#[test]
fn unparseable_rows_never_abort_the_run() -> PolarsResult<()> {
    let mut df = string_frame(
        vec![Some("garbage"), Some("2024-13-45")],
        vec![Some("also garbage"), Some("12:00:00")],
    )?;

    unify_settlement_timestamp(&mut df)?;

    let parsed = df.column("date_reglement")?.datetime()?;
    assert_eq!(parsed.null_count(), 2);
    Ok(())
}
