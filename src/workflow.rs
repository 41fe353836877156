use anyhow::{Context, Result};
use fsindex::{FileRecord, Reporter, SearchOutcome, TracingReporter};
use std::path::PathBuf;

use crate::settings::ResolvedConfig;

/// Results of one invocation, in the order the steps ran.
#[derive(Debug, Default)]
pub(crate) struct WorkflowOutcome {
	/// Location and records of a freshly built index.
	pub(crate) indexed: Option<(PathBuf, Vec<FileRecord>)>,
	pub(crate) search: Option<SearchOutcome>,
}

/// Coordinates the index and search steps requested on the command line.
pub(crate) struct IndexWorkflow {
	config: ResolvedConfig,
	reporter: Box<dyn Reporter>,
}

impl IndexWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self::with_reporter(config, Box::new(TracingReporter))
	}

	pub(crate) fn with_reporter(config: ResolvedConfig, reporter: Box<dyn Reporter>) -> Self {
		Self { config, reporter }
	}

	/// Build the index if requested, then search it if requested.
	pub(crate) fn run(self) -> Result<WorkflowOutcome> {
		let index = &self.config.index;
		let plan = &self.config.plan;
		let mut outcome = WorkflowOutcome::default();

		if let Some(directory) = &plan.directory {
			let records = fsindex::build_index(directory, index, self.reporter.as_ref())
				.with_context(|| format!("failed to index {}", directory.display()))?;
			outcome.indexed = Some((index.index_path.clone(), records));
		}

		if let Some(query) = &plan.query {
			let result = fsindex::search(&index.index_path, query, self.reporter.as_ref())
				.with_context(|| format!("failed to search for '{query}'"))?;
			outcome.search = Some(result);
		}

		Ok(outcome)
	}
}
