use std::ffi::OsStr;

/// Entries whose base name starts with this prefix are never indexed.
///
/// Directories carrying the prefix are pruned together with their subtree.
pub const EXCLUDED_PREFIX: &str = ".git";

/// Configuration options for filesystem traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilesystemOptions {
	/// Follow symbolic links during traversal.
	///
	/// When disabled a link is indexed as a file of its own: its size comes
	/// from the link metadata and its content is sampled through the link.
	pub follow_symlinks: bool,
}

impl FilesystemOptions {
	/// Whether an entry with the given base name is skipped.
	#[must_use]
	pub fn is_excluded(&self, name: &OsStr) -> bool {
		name.as_encoded_bytes()
			.starts_with(EXCLUDED_PREFIX.as_bytes())
	}
}
