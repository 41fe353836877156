use std::path::PathBuf;

use crate::systems::filesystem::FilesystemOptions;

/// File name of the index table when no other location is configured.
pub const DEFAULT_INDEX_FILE: &str = "index.csv";

/// Explicit configuration for an indexing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
	/// Where the table is written. Relative paths resolve against the working directory.
	pub index_path: PathBuf,
	pub filesystem: FilesystemOptions,
}

impl Default for IndexConfig {
	fn default() -> Self {
		Self {
			index_path: PathBuf::from(DEFAULT_INDEX_FILE),
			filesystem: FilesystemOptions::default(),
		}
	}
}

impl IndexConfig {
	#[must_use]
	pub fn with_index_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.index_path = path.into();
		self
	}
}
