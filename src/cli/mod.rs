// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (wrong number of paths, unknown option) or `--help` is
/// given, clap prints the usage or help text and exits the process with a
/// non-zero status for errors.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
