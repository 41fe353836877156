use std::path::PathBuf;

use fsindex::IndexConfig;

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub index: IndexConfig,
	pub output: OutputFormat,
	pub verbose: bool,
	pub plan: RunPlan,
}

/// What the invocation asked for. Both steps may be present, in which case the
/// index is built first and the search runs against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunPlan {
	/// Root to index when `--index` was given.
	pub directory: Option<PathBuf>,
	/// Query to look up when `--search` was given.
	pub query: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
