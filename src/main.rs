mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{parse_cli, print_index_summary, print_search_outcome};
use workflow::IndexWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	fsindex::logging::initialize(resolved.verbose);

	if cli.print_config {
		resolved.print_summary();
	}

	let format = resolved.output;
	let outcome = IndexWorkflow::from_config(resolved).run()?;

	if let Some((index, records)) = &outcome.indexed {
		print_index_summary(format, index, records)?;
	}
	if let Some(search) = &outcome.search {
		print_search_outcome(format, search)?;
	}

	Ok(())
}
