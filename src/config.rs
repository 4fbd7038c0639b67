//! Command-line configuration.

use crate::error::{BudgetError, Result};
use crate::report::ReportDetail;

pub const USAGE: &str = "\
Usage: money-watcher [--summary | --detailed]

Options:
  -d, --detailed   Break each category down by essentiality and list its expenses
      --summary    Print one total per category (default)
  -h, --help       Show this message

Environment:
  RUST_LOG         Log level written to stderr, e.g. debug or warn";

/// Session settings taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Level of detail for the end-of-cycle report.
    pub detail: ReportDetail,

    /// Print usage and exit instead of starting a session.
    pub show_help: bool,
}

impl Config {
    /// Parses arguments, excluding the program name.
    ///
    /// When both `--summary` and `--detailed` are given, the last one wins.
    pub fn from_args<I>(args: I) -> Result<Config>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut config = Config::default();
        for arg in args {
            match arg.as_ref() {
                "-d" | "--detailed" => config.detail = ReportDetail::Detailed,
                "--summary" => config.detail = ReportDetail::Summary,
                "-h" | "--help" => config.show_help = true,
                other => return Err(BudgetError::UnknownArgument(other.to_string())),
            }
        }
        Ok(config)
    }
}
