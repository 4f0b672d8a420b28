pub mod config;
pub mod metric_type;
pub mod partial;
pub mod standard;

mod common;

pub use config::MetricConfig;
pub use metric_type::{Implementation, MetricKind};
pub use partial::{
    compute_error_enhanced, compute_error_enhanced_loop, compute_error_enhanced_vec,
    compute_error_partial, compute_error_partial_loop, compute_error_partial_vec, EnhancedMetric,
    PartialMetric,
};
pub use standard::{compute_error, compute_error_loop, compute_error_vec, StandardMetric};
