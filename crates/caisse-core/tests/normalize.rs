use caisse_core::error::PipelineError;
use caisse_core::normalize::{
    ensure_expected_schema, normalize_column_names, normalize_name, EXPECTED_COLUMNS,
};
use polars::prelude::*;

#[test]
fn names_are_folded_to_canonical_form() {
    assert_eq!(normalize_name(" Date Règlement "), "date_reglement");
    assert_eq!(normalize_name("MONTANT RGL"), "montant_rgl");
    assert_eq!(normalize_name("Solde_CPP"), "solde_cpp");
    assert_eq!(normalize_name("Clientèle à Crédit"), "clientele_a_credit");
}

#[test]
fn dataframe_columns_are_renamed_in_place() -> PolarsResult<()> {
    let mut df = DataFrame::new(vec![
        Series::new(" Restaurant ".into(), vec!["R1"]).into(),
        Series::new("Montant Rgl".into(), vec!["10"]).into(),
    ])?;

    normalize_column_names(&mut df)?;

    assert_eq!(df.get_column_names_str(), vec!["restaurant", "montant_rgl"]);
    Ok(())
}

fn frame_with(columns: &[&str]) -> DataFrame {
    let cols: Vec<Column> = columns
        .iter()
        .map(|name| Series::new((*name).into(), vec!["x"]).into())
        .collect();
    DataFrame::new(cols).expect("test frame must build")
}

#[test]
fn complete_schema_passes_the_check() {
    let df = frame_with(&EXPECTED_COLUMNS);
    assert!(ensure_expected_schema(&df).is_ok());
}

#[test]
fn missing_expected_column_is_a_schema_error() {
    let present: Vec<&str> = EXPECTED_COLUMNS
        .iter()
        .copied()
        .filter(|column| *column != "solde_cpp")
        .collect();
    let df = frame_with(&present);

    match ensure_expected_schema(&df) {
        Err(PipelineError::Schema(column)) => assert_eq!(column, "solde_cpp"),
        other => panic!("expected a schema error, got {other:?}"),
    }
}
