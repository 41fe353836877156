use crate::types::FileRecord;

/// Captures the result of one lookup against an index table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
	pub query: String,
	/// Matching records in table order.
	pub matches: Vec<FileRecord>,
	pub warning: Option<SearchWarning>,
}

/// Non-fatal conditions noticed while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchWarning {
	/// The table holds no data rows, so nothing can match.
	EmptyIndex,
}

impl SearchOutcome {
	#[must_use]
	pub fn is_empty_index(&self) -> bool {
		self.warning == Some(SearchWarning::EmptyIndex)
	}
}
