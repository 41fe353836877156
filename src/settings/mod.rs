//! Configuration loading and resolution utilities.
//!
//! [`load`] returns a [`ResolvedConfig`] that the workflow consumes. Values are
//! layered from defaults, config files, `FSINDEX__` environment variables and
//! finally CLI flags.

mod raw;
mod resolved;
mod sources;
mod util;

use anyhow::{Context, Result};

pub use resolved::{ResolvedConfig, RunPlan};
pub(crate) use sources::user_config_file;

use crate::cli::CliArgs;
use raw::RawConfig;

/// Merge every configuration layer for this invocation and validate the result.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = sources::build_config(cli)?
		.try_deserialize()
		.context("configuration does not match the expected layout")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
