//! Progress reporting hooks for the indexer and searcher.
//!
//! The library never installs a global logger. Callers hand a [`Reporter`] to
//! the entry points; [`TracingReporter`] forwards events to `tracing` and
//! [`NullReporter`] discards them.

use std::path::Path;

use crate::types::FileRecord;

/// Receives notable events from an indexing or search run.
pub trait Reporter {
	/// A file was sampled and recorded.
	fn file_indexed(&self, _record: &FileRecord) {}

	/// The index table was written.
	fn index_written(&self, _path: &Path, _records: usize) {}

	/// The index table holds a header but no rows.
	fn empty_index(&self, _path: &Path) {}

	/// A search finished scanning the table.
	fn search_finished(&self, _path: &Path, _query: &str, _matches: usize) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Emits each event as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
	fn file_indexed(&self, record: &FileRecord) {
		tracing::debug!(
			file = %record.path,
			name = %record.name,
			size = record.size,
			content_type = %record.content_type,
			"indexed file"
		);
	}

	fn index_written(&self, path: &Path, records: usize) {
		tracing::info!(index = %path.display(), records, "created index file");
	}

	fn empty_index(&self, path: &Path) {
		tracing::warn!(index = %path.display(), "index file is empty, run with --index first");
	}

	fn search_finished(&self, path: &Path, query: &str, matches: usize) {
		tracing::debug!(index = %path.display(), query, matches, "search finished");
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use std::cell::RefCell;
	use std::path::{Path, PathBuf};

	use super::Reporter;
	use crate::types::FileRecord;

	/// Captures events so tests can assert on what was reported.
	#[derive(Debug, Default)]
	pub(crate) struct RecordingReporter {
		pub(crate) indexed: RefCell<Vec<String>>,
		pub(crate) written: RefCell<Option<(PathBuf, usize)>>,
		pub(crate) empty: RefCell<Vec<PathBuf>>,
	}

	impl Reporter for RecordingReporter {
		fn file_indexed(&self, record: &FileRecord) {
			self.indexed.borrow_mut().push(record.path.clone());
		}

		fn index_written(&self, path: &Path, records: usize) {
			*self.written.borrow_mut() = Some((path.to_path_buf(), records));
		}

		fn empty_index(&self, path: &Path) {
			self.empty.borrow_mut().push(path.to_path_buf());
		}
	}
}
