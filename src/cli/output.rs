use std::path::Path;

use anyhow::Result;
use fsindex::{FileRecord, SearchOutcome};
use serde_json::json;

use super::OutputFormat;

/// Print the result of an indexing run.
pub(crate) fn print_index_summary(
	format: OutputFormat,
	index: &Path,
	records: &[FileRecord],
) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			println!("Indexed {} files into {}", records.len(), index.display());
		}
		OutputFormat::Json => println!("{}", format_index_summary_json(index, records)?),
	}
	Ok(())
}

/// Print every match of a search, one per line in plain mode.
pub(crate) fn print_search_outcome(format: OutputFormat, outcome: &SearchOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			for record in &outcome.matches {
				println!("{}", format_record_plain(record));
			}
		}
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
	}
	Ok(())
}

/// Render a record as `[name size type path]`.
pub(crate) fn format_record_plain(record: &FileRecord) -> String {
	format!(
		"[{} {} {} {}]",
		record.name, record.size, record.content_type, record.path
	)
}

pub(crate) fn format_index_summary_json(index: &Path, records: &[FileRecord]) -> Result<String> {
	let payload = json!({
		"index": index.display().to_string(),
		"records": records.len(),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = json!({
		"query": outcome.query,
		"empty_index": outcome.is_empty_index(),
		"matches": outcome.matches,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}
