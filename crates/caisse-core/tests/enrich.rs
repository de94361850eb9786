use caisse_core::enrich::{add_calendar_columns, coerce_finance_columns, FINANCE_COLUMNS};
use chrono::NaiveDate;
use polars::prelude::*;

fn micros(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
        .and_utc()
        .timestamp_micros()
}

fn datetime_frame(values: Vec<Option<i64>>) -> PolarsResult<DataFrame> {
    let series = Series::new("date_reglement".into(), values)
        .cast(&DataType::Datetime(TimeUnit::Microseconds, None))?;
    DataFrame::new(vec![series.into()])
}

#[test]
fn calendar_columns_follow_the_timestamp() -> PolarsResult<()> {
    let mut df = datetime_frame(vec![
        Some(micros(2024, 1, 15, 13, 45)),
        Some(micros(2024, 12, 30, 0, 5)),
        None,
    ])?;

    add_calendar_columns(&mut df)?;

    let annee = df.column("annee")?.i32()?;
    let mois = df.column("mois")?.i32()?;
    let semaine = df.column("semaine")?.i32()?;
    let heure = df.column("heure")?.i32()?;
    let jour = df.column("jour")?.date()?;

    assert_eq!(annee.get(0), Some(2024));
    assert_eq!(mois.get(0), Some(1));
    assert_eq!(semaine.get(0), Some(3));
    assert_eq!(heure.get(0), Some(13));

    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    let expected_days = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .signed_duration_since(epoch)
        .num_days() as i32;
    assert_eq!(jour.get(0), Some(expected_days));

    // 2024-12-30 is a Monday and falls in ISO week 1 of 2025.
    assert_eq!(semaine.get(1), Some(1));
    assert_eq!(heure.get(1), Some(0));

    assert_eq!(annee.get(2), None);
    assert_eq!(jour.get(2), None);
    Ok(())
}

#[test]
fn finance_columns_coerce_to_float_with_null_on_failure() -> PolarsResult<()> {
    let mut df = DataFrame::new(vec![
        Series::new(
            "montant_rgl".into(),
            vec![Some("12.5"), Some("abc"), None, Some("NaN")],
        )
        .into(),
        Series::new(
            "montant_verse".into(),
            vec![Some("10"), Some("10"), Some("10"), Some("10")],
        )
        .into(),
        Series::new(
            "montant_rst".into(),
            vec![Some("0"), Some("1.25"), Some(""), Some("2")],
        )
        .into(),
        Series::new(
            "solde_cpp".into(),
            vec![Some("100.0"), Some("-5"), Some("1e3"), Some("7")],
        )
        .into(),
    ])?;

    coerce_finance_columns(&mut df)?;

    for column in FINANCE_COLUMNS {
        assert_eq!(df.column(column)?.dtype(), &DataType::Float64);
    }

    let rgl = df.column("montant_rgl")?.f64()?;
    assert_eq!(rgl.get(0), Some(12.5));
    assert_eq!(rgl.get(1), None);
    assert_eq!(rgl.get(2), None);
    assert_eq!(rgl.get(3), None);

    let rst = df.column("montant_rst")?.f64()?;
    assert_eq!(rst.get(2), None);

    let solde = df.column("solde_cpp")?.f64()?;
    assert_eq!(solde.get(1), Some(-5.0));
    assert_eq!(solde.get(2), Some(1000.0));
    Ok(())
}
