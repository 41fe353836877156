//! Builds the flat metadata index for a directory tree.
//!
//! An [`Indexer`] walks the tree, samples the head of every file to infer its
//! content type, and persists the collected records as a table. Any failure
//! aborts the run before the table is touched.

mod config;

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use config::{DEFAULT_INDEX_FILE, IndexConfig};

use crate::error::{IndexError, Result};
use crate::report::Reporter;
use crate::sniff::{SNIFF_LEN, sniff};
use crate::systems::filesystem::{FileEntry, walk_files};
use crate::table::write_table;
use crate::types::FileRecord;

/// Walks a directory tree and writes its index table.
pub struct Indexer<'a> {
	config: IndexConfig,
	reporter: &'a dyn Reporter,
}

impl<'a> Indexer<'a> {
	#[must_use]
	pub fn new(config: IndexConfig, reporter: &'a dyn Reporter) -> Self {
		Self { config, reporter }
	}

	/// Index `root` and overwrite the configured table with the result.
	pub fn build(&self, root: &Path) -> Result<Vec<FileRecord>> {
		let records = self.collect(root)?;
		write_table(&self.config.index_path, &records)?;
		self.reporter
			.index_written(&self.config.index_path, records.len());
		Ok(records)
	}

	/// Traverse `root` and return its records in visitation order without persisting them.
	pub fn collect(&self, root: &Path) -> Result<Vec<FileRecord>> {
		let mut records = Vec::new();
		walk_files(root, &self.config.filesystem, |entry| {
			let record = self.record_for(entry)?;
			self.reporter.file_indexed(&record);
			records.push(record);
			Ok(())
		})?;
		Ok(records)
	}

	fn record_for(&self, entry: FileEntry) -> Result<FileRecord> {
		let sample = read_sample(&entry.path)?;
		let content_type = sniff(&sample);
		Ok(FileRecord::from_path(
			&entry.path,
			entry.metadata.len(),
			content_type,
		))
	}
}

/// Read the first [`SNIFF_LEN`] bytes into a zeroed window of exactly that size.
///
/// Files shorter than the window leave trailing NULs in place, so short text
/// files sniff as binary. The handle is closed on return.
fn read_sample(path: &Path) -> Result<Vec<u8>> {
	let file = File::open(path).map_err(|err| IndexError::file_access(path, err))?;
	let mut sample = Vec::with_capacity(SNIFF_LEN);
	file.take(SNIFF_LEN as u64)
		.read_to_end(&mut sample)
		.map_err(|err| IndexError::file_access(path, err))?;
	sample.resize(SNIFF_LEN, 0);
	Ok(sample)
}
