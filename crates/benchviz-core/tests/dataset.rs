// File: crates/benchviz-core/tests/dataset.rs
// Purpose: Long-format aggregation: declared keys, implicit index, ordering and length checks.

use benchviz_core::{parse_color, Dataset, Error, Keys, Series};

const CAPS: [f64; 6] = [4.0, 1024.0, 4096.0, 8192.0, 16384.0, 32768.0];

fn series(label: &str, values: &[f64]) -> Series {
    Series::from_values(label, parse_color("k").unwrap(), values)
}

#[test]
fn length_mismatch_against_declared_keys() {
    let s = series("spin", &[1.0, 2.0, 3.0, 4.0, 5.0]);
    let err = Dataset::aggregate(vec![s], Keys::Declared(CAPS.to_vec()), "cap", "time").unwrap_err();
    match err {
        Error::LengthMismatch { label, expected, actual } => {
            assert_eq!(label, "spin");
            assert_eq!(expected, 6);
            assert_eq!(actual, 5);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn matching_length_produces_one_record_per_key() {
    let s = series("spin", &[1.0, 2.0, 3.0, 4.0, 5.0]);
    let keys = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let ds = Dataset::aggregate(vec![s], Keys::Declared(keys.clone()), "cap", "time").unwrap();
    assert_eq!(ds.len(), 5);
    let got: Vec<(f64, f64)> = ds.records().iter().map(|r| (r.key, r.value)).collect();
    assert_eq!(got, keys.iter().copied().zip([1.0, 2.0, 3.0, 4.0, 5.0]).collect::<Vec<_>>());
}

#[test]
fn capacity_sweep_has_series_times_keys_rows() {
    let labels = ["spin", "pipe", "chan", "cond"];
    let all: Vec<Series> = labels
        .iter()
        .enumerate()
        .map(|(i, l)| series(l, &CAPS.map(|c| c.log2() + i as f64)))
        .collect();
    let ds = Dataset::aggregate(all, Keys::Declared(CAPS.to_vec()), "cap", "time").unwrap();

    assert_eq!(ds.len(), 24);
    assert_eq!(ds.labels(), &["spin", "pipe", "chan", "cond"]);
    assert_eq!(ds.keys(), CAPS.to_vec());

    // grouped by series in insertion order, keys in declared order within a group
    let first_six: Vec<&str> = ds.records()[..6].iter().map(|r| r.label.as_str()).collect();
    assert_eq!(first_six, vec!["spin"; 6]);
    let keys_of_pipe: Vec<f64> = ds.records()[6..12].iter().map(|r| r.key).collect();
    assert_eq!(keys_of_pipe, CAPS.to_vec());
}

#[test]
fn declared_keys_ignore_loaded_x() {
    let s = Series::with_data("chan", parse_color("b").unwrap(), vec![(0.0, 7.0), (1.0, 8.0)]);
    let ds = Dataset::aggregate(vec![s], Keys::Declared(vec![4.0, 1024.0]), "cap", "time").unwrap();
    let got: Vec<(f64, f64)> = ds.records().iter().map(|r| (r.key, r.value)).collect();
    assert_eq!(got, vec![(4.0, 7.0), (1024.0, 8.0)]);
}

#[test]
fn implicit_index_uses_sample_x() {
    let a = series("a", &[5.0, 6.0, 7.0]);
    let b = series("b", &[1.0]);
    // ragged series are kept; b has no records at keys 2 and 3
    let ds = Dataset::aggregate(vec![a, b], Keys::Index, "index", "value").unwrap();
    assert_eq!(ds.len(), 4);
    assert_eq!(ds.declared_keys(), None);
    assert_eq!(ds.keys(), vec![1.0, 2.0, 3.0]);
    let lines = ds.lines();
    assert_eq!(lines[0], ("a".to_string(), vec![(1.0, 5.0), (2.0, 6.0), (3.0, 7.0)]));
    assert_eq!(lines[1], ("b".to_string(), vec![(1.0, 1.0)]));
}

#[test]
fn duplicate_labels_are_rejected() {
    let err = Dataset::aggregate(
        vec![series("x", &[1.0]), series("x", &[2.0])],
        Keys::Index,
        "index",
        "value",
    )
    .unwrap_err();
    assert!(matches!(err, Error::DuplicateLabel { ref label } if label == "x"), "got {err:?}");
}

#[test]
fn values_pass_through_unchanged() {
    let values = [0.1, 1e9, -3.5, 0.0, 2.25, 7.0];
    let ds = Dataset::aggregate(vec![series("v", &values)], Keys::Declared(CAPS.to_vec()), "cap", "time").unwrap();
    let got: Vec<f64> = ds.records().iter().map(|r| r.value).collect();
    assert_eq!(got, values.to_vec());
}
