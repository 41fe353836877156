use clap::{Command, CommandFactory, FromArgMatches};

use super::definitions::CliArgs;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
///
/// Usage errors print a diagnostic and exit with a non-zero status.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

pub(super) fn cli_command() -> Command {
	CliArgs::command()
}
