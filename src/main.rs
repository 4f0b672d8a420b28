//! curve-error self-check
//!
//! Loads the observed (`data_V`) and reference (`data_JD`) arrays from a data
//! file, builds a synthetic prediction and verifies that the loop and
//! vectorized forms of every error metric agree.
//!
//! Run with:
//!   cargo run -- --data data/loadData.m
//! Set `CURVE_ERROR_LOG=debug` for diagnostics.
use std::process::ExitCode;

use curve_error::cli;

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter("CURVE_ERROR_LOG")
        .write_style("CURVE_ERROR_LOG_STYLE");
    env_logger::init_from_env(env);

    let status = cli::main_with_args(
        std::env::args_os(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    ExitCode::from(status)
}
