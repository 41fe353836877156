use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, RunPlan};

mod index;
mod output;

use index::IndexSection;
use output::{LogSection, OutputSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	index: IndexSection,
	output: OutputSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.index.apply_cli_overrides(cli);
		self.output.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources::detect(cli, self.index.path.is_some());

		let config = ResolvedConfig {
			index: self.index.resolve(),
			output: self.output.resolve(),
			verbose: self.log.resolve(),
			plan: RunPlan {
				directory: cli.index.then(|| cli.directory.clone()).flatten(),
				query: cli.search.clone(),
			},
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

#[cfg(test)]
mod tests;
