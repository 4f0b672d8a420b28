pub mod error;
pub mod metric;
pub mod data;
pub mod check;
pub mod cli;

// Convenience re-exports
pub use error::{MetricError, MetricResult};
pub use metric::{
    compute_error, compute_error_enhanced, compute_error_partial, Implementation, MetricConfig,
    MetricKind,
};
pub use data::{load_curve_data, CurveData};
pub use check::{run_self_check, EquivalenceReport, Tolerance};
