use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while building or searching an index.
///
/// Every variant carries the path it concerns so callers can report the
/// failure without extra bookkeeping. None of them are retried.
#[derive(Debug, Error)]
pub enum IndexError {
	/// The root could not be enumerated or walked.
	#[error("failed to traverse {}: {source}", .path.display())]
	Traversal {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A discovered file could not be opened or sampled.
	#[error("failed to read file {}: {source}", .path.display())]
	FileAccess {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The index table could not be created or written.
	#[error("failed to write index {}: {source}", .path.display())]
	Persistence {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// No index table exists at the requested location.
	#[error("index {} does not exist; build it with --index first", .path.display())]
	IndexNotFound { path: PathBuf },

	/// The index table exists but cannot be decoded.
	#[error("failed to read index {}{}: {reason}", .path.display(), line_suffix(.line))]
	IndexRead {
		path: PathBuf,
		line: Option<u64>,
		reason: String,
	},
}

impl IndexError {
	pub(crate) fn traversal(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Traversal {
			path: path.into(),
			source,
		}
	}

	pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::FileAccess {
			path: path.into(),
			source,
		}
	}

	pub(crate) fn persistence(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Persistence {
			path: path.into(),
			source,
		}
	}

	pub(crate) fn index_read(
		path: impl Into<PathBuf>,
		line: Option<u64>,
		reason: impl Into<String>,
	) -> Self {
		Self::IndexRead {
			path: path.into(),
			line,
			reason: reason.into(),
		}
	}
}

fn line_suffix(line: &Option<u64>) -> String {
	line.map_or_else(String::new, |line| format!(" (line {line})"))
}

pub type Result<T, E = IndexError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn index_read_message_includes_line_when_known() {
		let err = IndexError::index_read("index.csv", Some(3), "invalid size");
		assert_eq!(
			err.to_string(),
			"failed to read index index.csv (line 3): invalid size"
		);

		let err = IndexError::index_read("index.csv", None, "missing header");
		assert_eq!(err.to_string(), "failed to read index index.csv: missing header");
	}

	#[test]
	fn io_variants_expose_their_source() {
		use std::error::Error as _;

		let err = IndexError::file_access(
			"dir/a.txt",
			io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
		);
		assert!(err.to_string().contains("dir/a.txt"));
		assert_eq!(err.source().map(ToString::to_string), Some("denied".into()));
	}
}
