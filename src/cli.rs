//! Command-line self-check.
//!
//! `--data FILE` (default `data/loadData.m`), `--config FILE` (JSON
//! `MetricConfig`), `--json` (print the reports as JSON).
use std::ffi::OsString;
use std::io::Write;

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use log::debug;

use crate::check::{run_self_check, EquivalenceReport, Tolerance};
use crate::data::load_curve_data;
use crate::metric::MetricConfig;

/// Every variant agreed.
pub const EXIT_OK: u8 = 0;
/// At least one variant's loop and vectorized forms diverged.
pub const EXIT_MISMATCH: u8 = 1;
/// Bad arguments, unreadable data or config.
pub const EXIT_ERROR: u8 = 2;

fn make_options_parser() -> Command {
    Command::new("curve-error")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks loop and vectorized curve error metrics against each other")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("FILE")
                .help("Text file containing data_V and data_JD arrays")
                .default_value("data/loadData.m"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON file overriding the metric constants"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the reports as JSON"),
        )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub data: String,
    pub config: Option<String>,
    pub json: bool,
}

impl Options {
    /// Parses a full argument list, binary name first.
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        Ok(Options {
            data: matches
                .get_one::<String>("data")
                .cloned()
                .unwrap_or_else(|| "data/loadData.m".to_string()),
            config: matches.get_one::<String>("config").cloned(),
            json: matches.get_flag("json"),
        })
    }
}

/// Loads the data and config named by `options`, runs the self-check and
/// writes the reports to `out`.
pub fn run(options: &Options, out: &mut dyn Write) -> anyhow::Result<Vec<EquivalenceReport>> {
    let config = match &options.config {
        Some(path) => MetricConfig::from_json_file(path)
            .with_context(|| format!("reading metric config {}", path))?,
        None => MetricConfig::default(),
    };
    debug!("metric config: {:?}", config);

    let data = load_curve_data(&options.data)
        .with_context(|| format!("loading curve data from {}", options.data))?;
    let reports = run_self_check(&data, &config, &Tolerance::default())?;

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
    } else {
        writeln!(out, "curve-error: {} samples from {}", data.len(), options.data)?;
        for report in &reports {
            writeln!(out, "  {}", report)?;
        }
    }
    Ok(reports)
}

pub fn exit_status(reports: &[EquivalenceReport]) -> u8 {
    if reports.iter().all(|r| r.passed) {
        EXIT_OK
    } else {
        EXIT_MISMATCH
    }
}

/// Parses `args`, runs the self-check and returns the process exit status.
///
/// Help and version output go to `out`; argument and load errors go to `err`.
pub fn main_with_args<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let options = match Options::parse_from(args) {
        Ok(options) => options,
        Err(e) => {
            let stream: &mut dyn Write = if e.use_stderr() { &mut *err } else { &mut *out };
            let _ = write!(stream, "{}", e.render());
            return if e.use_stderr() { EXIT_ERROR } else { EXIT_OK };
        }
    };

    match run(&options, out) {
        Ok(reports) => exit_status(&reports),
        Err(e) => {
            let _ = writeln!(err, "error: {:#}", e);
            EXIT_ERROR
        }
    }
}
