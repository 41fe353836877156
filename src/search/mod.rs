//! Substring lookup over a persisted index table.

mod outcome;

use std::path::Path;

pub use outcome::{SearchOutcome, SearchWarning};

use crate::error::Result;
use crate::report::Reporter;
use crate::table::{TableContents, read_table};

/// Loads an index table and filters it by file name.
pub struct Searcher<'a> {
	reporter: &'a dyn Reporter,
}

impl<'a> Searcher<'a> {
	#[must_use]
	pub fn new(reporter: &'a dyn Reporter) -> Self {
		Self { reporter }
	}

	/// Return the records whose name contains `query`, in table order.
	///
	/// Matching is case-sensitive and literal; an empty query matches every
	/// record. A table without data rows is not an error: the outcome carries
	/// [`SearchWarning::EmptyIndex`] instead.
	pub fn search(&self, index_path: &Path, query: &str) -> Result<SearchOutcome> {
		let records = match read_table(index_path)? {
			TableContents::Empty => {
				self.reporter.empty_index(index_path);
				return Ok(SearchOutcome {
					query: query.to_string(),
					matches: Vec::new(),
					warning: Some(SearchWarning::EmptyIndex),
				});
			}
			TableContents::Records(records) => records,
		};

		let matches: Vec<_> = records
			.into_iter()
			.filter(|record| record.name_contains(query))
			.collect();
		self.reporter
			.search_finished(index_path, query, matches.len());

		Ok(SearchOutcome {
			query: query.to_string(),
			matches,
			warning: None,
		})
	}
}
