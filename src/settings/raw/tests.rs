use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::{CliArgs, OutputFormat};

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"fsindex",
		"-s",
		"json",
		"--index-file",
		"/tmp/idx.csv",
		"--follow-symlinks",
		"yes",
		"-o",
		"json",
		"-v",
	]);

	let mut config = RawConfig::default();
	config.index.path = Some(PathBuf::from("from-file.csv"));
	config.log.verbose = Some(false);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.index.path, Some(PathBuf::from("/tmp/idx.csv")));
	assert_eq!(config.index.follow_symlinks, Some(true));
	assert_eq!(config.output.format, Some(OutputFormat::Json));
	assert_eq!(config.log.verbose, Some(true));
}

#[test]
fn defaults_resolve_to_working_directory_index() {
	let cli = CliArgs::parse_from(["fsindex", "-i", "-d", "data"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.index.index_path, PathBuf::from("index.csv"));
	assert!(!resolved.index.filesystem.follow_symlinks);
	assert_eq!(resolved.output, OutputFormat::Plain);
	assert!(!resolved.verbose);
	assert_eq!(resolved.plan.directory, Some(PathBuf::from("data")));
	assert_eq!(resolved.plan.query, None);
}

#[test]
fn directory_is_ignored_without_index_flag() {
	let cli = CliArgs::parse_from(["fsindex", "-s", "x", "-d", "data"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolves");
	assert_eq!(resolved.plan.directory, None);
	assert_eq!(resolved.plan.query.as_deref(), Some("x"));
}

#[test]
fn empty_index_path_is_rejected_with_its_source() {
	let cli = CliArgs::parse_from(["fsindex", "-s", "x"]);
	let mut config = RawConfig::default();
	config.index.path = Some(PathBuf::new());
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("index.path"), "{message}");
	assert!(message.contains("must not be empty"), "{message}");
}
