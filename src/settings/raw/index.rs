use std::path::PathBuf;

use serde::Deserialize;

use fsindex::{FilesystemOptions, IndexConfig};

use crate::cli::CliArgs;

/// Index specific configuration options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct IndexSection {
	pub(super) path: Option<PathBuf>,
	pub(super) follow_symlinks: Option<bool>,
}

impl IndexSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.index_file.clone() {
			self.path = Some(path);
		}
		if let Some(value) = cli.follow_symlinks {
			self.follow_symlinks = Some(value);
		}
	}

	pub(super) fn resolve(self) -> IndexConfig {
		let defaults = IndexConfig::default();
		IndexConfig {
			index_path: self.path.unwrap_or(defaults.index_path),
			filesystem: FilesystemOptions {
				follow_symlinks: self
					.follow_symlinks
					.unwrap_or(defaults.filesystem.follow_symlinks),
			},
		}
	}
}
