pub mod equivalence;
pub mod report;

pub use equivalence::{all_close, check_equivalence, run_self_check, Tolerance};
pub use report::EquivalenceReport;
