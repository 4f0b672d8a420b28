use std::path::PathBuf;

use curve_error::data::{synthetic_prediction, synthetic_prev_error};
use curve_error::{
    compute_error_enhanced, compute_error_partial, load_curve_data, run_self_check, MetricConfig,
    MetricError, MetricKind, Tolerance,
};

fn bundled_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("loadData.m")
}

#[test]
fn bundled_data_loads() {
    let data = load_curve_data(bundled_data()).unwrap();
    assert_eq!(data.observed.len(), data.reference.len());
    assert!(!data.is_empty());
    // The sweep crosses zero current, so both signs are present.
    assert!(data.reference.iter().any(|&j| j > 0.0));
    assert!(data.reference.iter().any(|&j| j < 0.0));
}

#[test]
fn bundled_data_passes_for_every_variant() {
    let data = load_curve_data(bundled_data()).unwrap();
    let reports = run_self_check(&data, &MetricConfig::default(), &Tolerance::default()).unwrap();

    assert_eq!(reports.len(), MetricKind::ALL.len());
    for report in &reports {
        assert!(report.passed, "{report}");
        assert_eq!(report.len, data.len());
        assert!(report.mismatches.is_empty());
    }
}

#[test]
fn partial_and_enhanced_agree_on_bundled_data() {
    let data = load_curve_data(bundled_data()).unwrap();
    let predicted = synthetic_prediction(&data);
    let prev = synthetic_prev_error(&data);

    let prev = Some(prev.as_slice());
    let partial =
        compute_error_partial(&predicted, &data.observed, &data.reference, prev).unwrap();
    let enhanced =
        compute_error_enhanced(&predicted, &data.observed, &data.reference, prev).unwrap();
    assert_eq!(partial, enhanced);
}

#[test]
fn reports_serialize_to_json() {
    let data = load_curve_data(bundled_data()).unwrap();
    let reports = run_self_check(&data, &MetricConfig::default(), &Tolerance::default()).unwrap();
    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["kind"], "standard");
    assert_eq!(json[2]["kind"], "enhanced");
    assert_eq!(json[1]["passed"], true);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_curve_data("does/not/exist.m").unwrap_err();
    assert!(matches!(err, MetricError::Io(_)));
}
