//! Flat metadata index of a directory tree with substring lookup.
//!
//! [`build_index`] walks a directory, sniffs the content type of every file
//! from its leading bytes, and writes one table row per file. [`search`]
//! reads that table back and returns the rows whose file name contains a
//! query. The table file is the only state shared between the two.

mod error;
pub mod indexing;
pub mod logging;
pub mod report;
pub mod search;
pub mod sniff;
mod systems;
pub mod table;
mod types;

use std::path::Path;

pub use error::{IndexError, Result};
pub use indexing::{DEFAULT_INDEX_FILE, IndexConfig, Indexer};
pub use report::{NullReporter, Reporter, TracingReporter};
pub use search::{SearchOutcome, SearchWarning, Searcher};
pub use sniff::sniff;
pub use systems::filesystem::{EXCLUDED_PREFIX, FilesystemOptions};
pub use types::{FileRecord, INDEX_HEADER};

/// Index `root` and persist the table at `config.index_path`.
///
/// Returns the records in traversal order. Any error aborts the run before
/// the table is written.
pub fn build_index(
	root: &Path,
	config: &IndexConfig,
	reporter: &dyn Reporter,
) -> Result<Vec<FileRecord>> {
	Indexer::new(config.clone(), reporter).build(root)
}

/// Return the records of the table at `index_path` whose name contains `query`.
pub fn search(index_path: &Path, query: &str, reporter: &dyn Reporter) -> Result<SearchOutcome> {
	Searcher::new(reporter).search(index_path, query)
}
