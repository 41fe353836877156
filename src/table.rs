//! Comma-separated persistence for index tables.
//!
//! A table is a header row ([`INDEX_HEADER`]) followed by one row per record.
//! Fields containing delimiters, quotes or line breaks are quoted by the CSV
//! codec, so names and paths round-trip exactly.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::{IndexError, Result};
use crate::types::{FileRecord, INDEX_HEADER};

/// Write `records` to `path`, replacing any existing table.
///
/// Rows go to a sibling temporary file which is renamed over `path` once
/// fully flushed; a failed write leaves the previous table untouched.
pub fn write_table(path: &Path, records: &[FileRecord]) -> Result<()> {
	let tmp_path = temp_path(path)?;
	if let Err(err) = write_rows(&tmp_path, records) {
		let _ = fs::remove_file(&tmp_path);
		return Err(IndexError::persistence(path, err));
	}

	if let Err(err) = replace(&tmp_path, path) {
		let _ = fs::remove_file(&tmp_path);
		return Err(IndexError::persistence(path, err));
	}

	Ok(())
}

fn write_rows(tmp_path: &Path, records: &[FileRecord]) -> io::Result<()> {
	let file = File::create(tmp_path)?;
	{
		let mut writer = WriterBuilder::new()
			.has_headers(false)
			.terminator(Terminator::Any(b'\n'))
			.from_writer(&file);

		writer.write_record(INDEX_HEADER)?;
		for record in records {
			writer.serialize(record)?;
		}
		writer.flush()?;
	}
	file.sync_all()
}

fn replace(tmp_path: &Path, path: &Path) -> io::Result<()> {
	if path.is_dir() {
		return Err(io::Error::new(
			io::ErrorKind::IsADirectory,
			"index location is a directory",
		));
	}
	// `rename` replaces an existing destination in a single step.
	fs::rename(tmp_path, path)
}

fn temp_path(path: &Path) -> Result<PathBuf> {
	let Some(name) = path.file_name() else {
		return Err(IndexError::persistence(
			path,
			io::Error::new(io::ErrorKind::InvalidInput, "index path has no file name"),
		));
	};
	let mut tmp_name = OsString::from(name);
	tmp_name.push(".tmp");
	Ok(path.with_file_name(tmp_name))
}

/// Rows loaded from an index table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableContents {
	/// The table has no data rows (possibly not even a header).
	Empty,
	/// Records in file order.
	Records(Vec<FileRecord>),
}

/// Load every record from the table at `path`.
///
/// Blank rows are skipped; a row with the wrong number of fields or a
/// non-numeric size makes the whole table unreadable.
pub fn read_table(path: &Path) -> Result<TableContents> {
	let file = File::open(path).map_err(|err| match err.kind() {
		io::ErrorKind::NotFound => IndexError::IndexNotFound {
			path: path.to_path_buf(),
		},
		_ => IndexError::index_read(path, None, err.to_string()),
	})?;

	let mut reader = ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.from_reader(file);

	let mut rows = reader.records();
	let header = match rows.next() {
		None => return Ok(TableContents::Empty),
		Some(row) => row.map_err(|err| csv_error(path, err))?,
	};
	if !is_expected_header(&header) {
		return Err(IndexError::index_read(
			path,
			line_of(&header),
			format!(
				"unexpected header `{}`, expected `{}`",
				header.iter().collect::<Vec<_>>().join(","),
				INDEX_HEADER.join(",")
			),
		));
	}

	let header = StringRecord::from(INDEX_HEADER.to_vec());
	let mut records = Vec::new();
	for row in rows {
		let row = row.map_err(|err| csv_error(path, err))?;
		if row.is_empty() {
			continue;
		}
		if row.len() != INDEX_HEADER.len() {
			return Err(IndexError::index_read(
				path,
				line_of(&row),
				format!("expected {} fields, found {}", INDEX_HEADER.len(), row.len()),
			));
		}
		let record: FileRecord = row
			.deserialize(Some(&header))
			.map_err(|err| IndexError::index_read(path, line_of(&row), err.to_string()))?;
		records.push(record);
	}

	if records.is_empty() {
		Ok(TableContents::Empty)
	} else {
		Ok(TableContents::Records(records))
	}
}

fn is_expected_header(header: &StringRecord) -> bool {
	header.len() == INDEX_HEADER.len()
		&& header
			.iter()
			.zip(INDEX_HEADER)
			// Tables written by other tools may start with a UTF-8 byte order mark.
			.all(|(actual, expected)| actual.trim_start_matches('\u{feff}') == expected)
}

fn line_of(row: &StringRecord) -> Option<u64> {
	row.position().map(|position| position.line())
}

fn csv_error(path: &Path, err: csv::Error) -> IndexError {
	let line = err.position().map(|position| position.line());
	IndexError::index_read(path, line, err.to_string())
}
