use caisse_core::stats::{pearson, quantile};

#[test]
fn quantile_interpolates_linearly_between_order_statistics() {
    let values: Vec<f64> = (1..=10).map(f64::from).collect();

    assert_eq!(quantile(&values, 0.25), Some(3.25));
    assert_eq!(quantile(&values, 0.75), Some(7.75));
    assert_eq!(quantile(&values, 0.0), Some(1.0));
    assert_eq!(quantile(&values, 1.0), Some(10.0));
    assert_eq!(quantile(&values, 0.5), Some(5.5));
}

#[test]
fn quantile_sorts_its_input_first() {
    let values = vec![9.0, 1.0, 5.0, 3.0, 7.0];
    assert_eq!(quantile(&values, 0.5), Some(5.0));
}

#[test]
fn quantile_of_nothing_is_undefined() {
    assert_eq!(quantile(&[], 0.5), None);
    assert_eq!(quantile(&[1.0], 0.5), Some(1.0));
}

#[test]
fn pearson_detects_perfect_linear_relationships() {
    let xs = vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
    let ys_up: Vec<Option<f64>> = xs.iter().map(|x| x.map(|v| 2.0 * v + 1.0)).collect();
    let ys_down: Vec<Option<f64>> = xs.iter().map(|x| x.map(|v| -3.0 * v)).collect();

    let up = pearson(&xs, &ys_up).expect("correlation must exist");
    assert!((up - 1.0).abs() < 1e-12);

    let down = pearson(&xs, &ys_down).expect("correlation must exist");
    assert!((down + 1.0).abs() < 1e-12);
}

#[test]
fn pearson_skips_pairs_with_a_missing_side() {
    let xs = vec![Some(1.0), None, Some(3.0), Some(5.0)];
    let ys = vec![Some(2.0), Some(100.0), None, Some(10.0)];

    // Only (1, 2) and (5, 10) survive: a perfect positive relationship.
    let r = pearson(&xs, &ys).expect("two pairs are enough");
    assert!((r - 1.0).abs() < 1e-12);
}

#[test]
fn pearson_of_a_constant_column_is_undefined() {
    let xs = vec![Some(5.0), Some(5.0), Some(5.0)];
    let ys = vec![Some(1.0), Some(2.0), Some(3.0)];

    assert_eq!(pearson(&xs, &ys), None);
    assert_eq!(pearson(&ys, &xs), None);
}

#[test]
fn pearson_needs_at_least_two_pairs() {
    let xs = vec![Some(1.0), None];
    let ys = vec![Some(2.0), Some(3.0)];
    assert_eq!(pearson(&xs, &ys), None);
}
