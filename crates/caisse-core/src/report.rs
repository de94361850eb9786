use chrono::NaiveDate;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use polars::prelude::*;

use crate::pipeline::Analysis;

const HEAD: usize = 5;

/// Renders the final report in its fixed section order. The caller decides
/// where the text goes; the pipeline itself never prints.
pub fn render(analysis: &Analysis) -> PolarsResult<String> {
    let views = &analysis.views;
    let mut out = String::from("===== RAPPORT FINAL =====\n");

    section(
        &mut out,
        "CA Mensuel",
        df_table(&views.ca_mensuel, &["Mois", "CA"], usize::MAX)?,
    );

    section(
        &mut out,
        "Solde Moyen Journalier",
        df_table(
            &views.solde_moyen_journalier,
            &["Jour", "Solde moyen"],
            HEAD,
        )?,
    );

    section(
        &mut out,
        "Top 10 Clients",
        df_table(
            &views.clients_top,
            &["Client", "Total depense", "Moyenne transaction", "Solde moyen"],
            usize::MAX,
        )?,
    );

    section(
        &mut out,
        "Clients a risque (impayes)",
        df_table(&views.clients_impayes, &["Client", "Montant impaye"], HEAD)?,
    );

    section(
        &mut out,
        "Top Restaurants",
        df_table(&views.ca_restaurant, &["Restaurant", "CA"], HEAD)?,
    );

    let heures_pointe = views
        .transactions_par_heure
        .clone()
        .lazy()
        .sort(
            ["nb_transactions"],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .collect()?;
    section(
        &mut out,
        "Heures de pointe",
        df_table(&heures_pointe, &["Heure", "Transactions"], HEAD)?,
    );

    let anomaly_count = analysis
        .outliers
        .as_ref()
        .map(|report| report.outliers.height())
        .unwrap_or(0);
    out.push_str(&format!(
        "\nNombre d'anomalies detectees: {anomaly_count}\n"
    ));

    section(
        &mut out,
        "Top Caissiers",
        df_table(
            &views.performance_caissiers,
            &["Caissier", "Montant total", "Transactions"],
            HEAD,
        )?,
    );

    match analysis.correlation_solde_depense {
        Some(r) => out.push_str(&format!(
            "\nCorrelation Solde_CPP vs Montant_Rgl: {r:.4}\n"
        )),
        None => out.push_str("\nCorrelation Solde_CPP vs Montant_Rgl: non definie\n"),
    }

    Ok(out)
}

fn section(out: &mut String, title: &str, table: Table) {
    out.push('\n');
    out.push_str(title);
    out.push_str(":\n");
    out.push_str(&table.to_string());
    out.push('\n');
}

fn df_table(df: &DataFrame, headers: &[&str], limit: usize) -> PolarsResult<Table> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.to_vec());

    let rows = df.height().min(limit);
    let columns = df.get_columns();
    for idx in 0..rows {
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            cells.push(fmt_cell(&column.as_materialized_series().get(idx)?));
        }
        table.add_row(cells);
    }

    Ok(table)
}

fn fmt_cell(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => format!("{v:.2}"),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::Date(days) => fmt_date(*days),
        other => other.to_string(),
    }
}

fn fmt_date(days_from_epoch: i32) -> String {
    // polars Date counts days since 1970-01-01; chrono counts from year 1.
    match NaiveDate::from_num_days_from_ce_opt(days_from_epoch + 719_163) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => days_from_epoch.to_string(),
    }
}
