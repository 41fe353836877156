use serde::Deserialize;

use crate::cli::{CliArgs, OutputFormat};

/// Presentation settings prior to CLI overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
	pub(super) format: Option<OutputFormat>,
}

impl OutputSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(format) = cli.output {
			self.format = Some(format);
		}
	}

	pub(super) fn resolve(self) -> OutputFormat {
		self.format.unwrap_or_default()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) verbose: Option<bool>,
}

impl LogSection {
	/// `--verbose` can only raise verbosity; a config file cannot silence it.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.verbose {
			self.verbose = Some(true);
		}
	}

	pub(super) fn resolve(self) -> bool {
		self.verbose.unwrap_or(false)
	}
}
