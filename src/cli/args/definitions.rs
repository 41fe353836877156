use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ArgGroup, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `fsindex` binary.
#[derive(Parser, Debug)]
#[command(
	name = "fsindex",
	version,
	long_version = long_version(),
	about = "Index file metadata under a directory and search it by name",
	color = ColorChoice::Auto,
	styles = cli_styles(),
	group(
		ArgGroup::new("action")
			.args(["index", "search"])
			.required(true)
			.multiple(true)
	)
)]
pub(crate) struct CliArgs {
	#[arg(
		short = 'i',
		long = "index",
		requires = "directory",
		help = "Build the index from --directory (default: disabled)"
	)]
	pub(crate) index: bool,
	#[arg(
		short = 'd',
		long = "directory",
		value_name = "PATH",
		help = "Directory to index, relative or absolute (required with --index)"
	)]
	pub(crate) directory: Option<PathBuf>,
	#[arg(
		short = 's',
		long = "search",
		value_name = "QUERY",
		help = "Print indexed files whose name contains QUERY (case-sensitive)"
	)]
	pub(crate) search: Option<String>,
	#[arg(
		short = 'v',
		long = "verbose",
		help = "Log every indexed file (default: disabled)"
	)]
	pub(crate) verbose: bool,
	#[arg(
		short = 'c',
		long = "config",
		value_name = "FILE",
		env = "FSINDEX_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "index-file",
		value_name = "PATH",
		help = "Location of the index table (default: ./index.csv)"
	)]
	pub(crate) index_file: Option<PathBuf>,
	#[arg(
		long = "follow-symlinks",
		value_parser = BoolishValueParser::new(),
		help = "Follow symbolic links while indexing (default: disabled)"
	)]
	pub(crate) follow_symlinks: Option<bool>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		help = "Choose how to print results (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
}
