use std::collections::BTreeMap;

use spsparse::{isnone, Destination, DuplicatePolicy, SortOrder, SparseConfig};

/// Folds coordinate entries into a map using the configured policy,
/// dropping none values the way a consolidation pass would.
fn fold(config: &SparseConfig, entries: &[([usize; 2], f64)]) -> BTreeMap<[usize; 2], f64> {
    let mut out = BTreeMap::new();
    for &(ix, v) in entries {
        out.entry(config.sort_order.sort_key(ix))
            .and_modify(|cur: &mut f64| *cur = config.duplicate_policy.resolve(*cur, v))
            .or_insert(v);
    }
    out.retain(|_, v| !config.is_none(*v));
    out
}

fn entries() -> Vec<([usize; 2], f64)> {
    vec![([0, 0], 1.0), ([1, 0], 4.0), ([0, 0], 2.0), ([0, 0], 3.0)]
}

fn config(policy: DuplicatePolicy) -> SparseConfig {
    SparseConfig {
        duplicate_policy: policy,
        ..SparseConfig::default()
    }
}

#[test]
fn leave_alone_keeps_first() {
    let out = fold(&config(DuplicatePolicy::LeaveAlone), &entries());
    assert_eq!(out[&[0_usize, 0]], 1.0);
}

#[test]
fn add_sums_everything() {
    let out = fold(&config(DuplicatePolicy::Add), &entries());
    assert_eq!(out[&[0_usize, 0]], 6.0);
    assert_eq!(out[&[1_usize, 0]], 4.0);
}

#[test]
fn replace_keeps_last() {
    let out = fold(&config(DuplicatePolicy::Replace), &entries());
    assert_eq!(out[&[0_usize, 0]], 3.0);
}

#[test]
fn cancelling_entries_are_dropped() {
    let out = fold(
        &config(DuplicatePolicy::Add),
        &[([2, 2], 1.5), ([2, 2], -1.5), ([0, 1], 1.0)],
    );
    assert!(!out.contains_key(&[2_usize, 2]));
    assert_eq!(out.len(), 1);
}

#[test]
fn nan_survives_unless_zero_nan() {
    let data = [([0, 0], f64::NAN)];
    assert_eq!(fold(&SparseConfig::default(), &data).len(), 1);

    let zero_nan = SparseConfig {
        zero_nan: true,
        ..SparseConfig::default()
    };
    assert!(fold(&zero_nan, &data).is_empty());
}

#[test]
fn col_major_keys() {
    let cfg = SparseConfig {
        sort_order: SortOrder::ColMajor,
        ..SparseConfig::default()
    };
    let out = fold(&cfg, &[([0, 1], 1.0), ([1, 0], 2.0)]);
    let keys: Vec<_> = out.keys().copied().collect();
    assert_eq!(keys, vec![[0, 1], [1, 0]]);
    assert_eq!(out[&[0_usize, 1]], 2.0);
}

#[test]
fn replace_then_add_into_dense_buffer() {
    let policy = DuplicatePolicy::ReplaceThenAdd;
    policy.check_destination(Destination::Dense).unwrap();

    let mut dense = vec![f64::NAN, 10.0, 0.0];
    for (i, v) in [(0, 1.0), (1, 2.0), (2, 5.0), (0, 1.0)] {
        dense[i] = policy.resolve(dense[i], v);
    }
    assert_eq!(dense, vec![2.0, 12.0, 5.0]);
    assert!(dense.iter().all(|v| !isnone(*v, true)));
}

#[test]
fn replace_then_add_rejected_for_sparse() {
    assert!(config(DuplicatePolicy::ReplaceThenAdd)
        .validate(Destination::Sparse)
        .is_err());
}
