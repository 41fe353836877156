use std::path::Path;

use serde::{Deserialize, Serialize};

/// Column names written as the first row of every index table.
pub const INDEX_HEADER: [&str; 4] = ["Name", "Size", "Type", "Path"];

/// Metadata captured for one indexed file.
///
/// Field order matches [`INDEX_HEADER`]; the serde names are the header cells so
/// the table codec can map rows onto this struct directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
	#[serde(rename = "Name")]
	pub name: String,
	#[serde(rename = "Size")]
	pub size: u64,
	#[serde(rename = "Type")]
	pub content_type: String,
	#[serde(rename = "Path")]
	pub path: String,
}

impl FileRecord {
	#[must_use]
	pub fn new(
		name: impl Into<String>,
		size: u64,
		content_type: impl Into<String>,
		path: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			size,
			content_type: content_type.into(),
			path: path.into(),
		}
	}

	/// Build a record for a path produced by traversal.
	///
	/// The base name falls back to the full path for roots such as `.` that
	/// have no final component.
	#[must_use]
	pub fn from_path(path: &Path, size: u64, content_type: impl Into<String>) -> Self {
		let display = path.to_string_lossy().into_owned();
		let name = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| display.clone());
		Self::new(name, size, content_type, display)
	}

	/// Whether the record's name contains `query` as a contiguous, case-sensitive substring.
	#[must_use]
	pub fn name_contains(&self, query: &str) -> bool {
		self.name.contains(query)
	}
}
