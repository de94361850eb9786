use polars::prelude::*;

/// The fixed set of grouped views computed over the cleaned table.
#[derive(Debug, Clone)]
pub struct AggregateViews {
    pub ca_journalier: DataFrame,
    pub ca_hebdomadaire: DataFrame,
    pub ca_mensuel: DataFrame,
    pub solde_moyen_journalier: DataFrame,
    pub clients_top: DataFrame,
    pub clients_impayes: DataFrame,
    pub ca_restaurant: DataFrame,
    pub transactions_par_heure: DataFrame,
    pub performance_caissiers: DataFrame,
}

/// Sums and means are null-aware; rows with a missing secondary amount simply
/// drop out of that aggregate. Sorts use `maintain_order` so ties keep their
/// first-appearance order and reruns print identically.
pub fn compute_views(df: &DataFrame) -> PolarsResult<AggregateViews> {
    let ca_journalier = df
        .clone()
        .lazy()
        .group_by_stable([col("jour")])
        .agg([col("montant_rgl").sum().alias("ca")])
        .sort(["jour"], ascending_stable())
        .collect()?;

    let ca_hebdomadaire = df
        .clone()
        .lazy()
        .group_by_stable([col("semaine")])
        .agg([col("montant_rgl").sum().alias("ca")])
        .sort(["semaine"], ascending_stable())
        .collect()?;

    let ca_mensuel = df
        .clone()
        .lazy()
        .group_by_stable([col("mois")])
        .agg([col("montant_rgl").sum().alias("ca")])
        .sort(["mois"], ascending_stable())
        .collect()?;

    let solde_moyen_journalier = df
        .clone()
        .lazy()
        .group_by_stable([col("jour")])
        .agg([col("solde_cpp").mean().alias("solde_moyen")])
        .sort(["jour"], ascending_stable())
        .collect()?;

    let clients_top = df
        .clone()
        .lazy()
        .group_by_stable([col("id_client")])
        .agg([
            col("montant_rgl").sum().alias("total_depense"),
            col("montant_rgl").mean().alias("moyenne_transaction"),
            col("solde_cpp").mean().alias("solde_moyen"),
        ])
        .sort(["total_depense"], descending_stable())
        .limit(10)
        .collect()?;

    let clients_impayes = df
        .clone()
        .lazy()
        .group_by_stable([col("id_client")])
        .agg([col("montant_rst").sum().alias("montant_rst")])
        .filter(col("montant_rst").gt(lit(0.0)))
        .sort(["montant_rst"], descending_stable())
        .collect()?;

    let ca_restaurant = df
        .clone()
        .lazy()
        .group_by_stable([col("restaurant")])
        .agg([col("montant_rgl").sum().alias("ca")])
        .sort(["ca"], descending_stable())
        .collect()?;

    let transactions_par_heure = df
        .clone()
        .lazy()
        .group_by_stable([col("heure")])
        .agg([col("montant_rgl").count().alias("nb_transactions")])
        .sort(["heure"], ascending_stable())
        .collect()?;

    let performance_caissiers = df
        .clone()
        .lazy()
        .group_by_stable([col("id_user")])
        .agg([
            col("montant_rgl").sum().alias("montant_total"),
            col("montant_rgl").count().alias("nb_transactions"),
        ])
        .sort(["montant_total"], descending_stable())
        .collect()?;

    Ok(AggregateViews {
        ca_journalier,
        ca_hebdomadaire,
        ca_mensuel,
        solde_moyen_journalier,
        clients_top,
        clients_impayes,
        ca_restaurant,
        transactions_par_heure,
        performance_caissiers,
    })
}

fn ascending_stable() -> SortMultipleOptions {
    SortMultipleOptions::default().with_maintain_order(true)
}

fn descending_stable() -> SortMultipleOptions {
    SortMultipleOptions::default()
        .with_order_descending(true)
        .with_maintain_order(true)
}
