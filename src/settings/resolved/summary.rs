use super::super::util::absolute_display;
use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Index file: {}", absolute_display(&config.index.index_path)),
		format!(
			"  Follow symlinks: {}",
			bool_to_word(config.index.filesystem.follow_symlinks)
		),
		format!("  Output: {}", config.output.as_str()),
		format!("  Verbose: {}", bool_to_word(config.verbose)),
	];
	match &config.plan.directory {
		Some(directory) => lines.push(format!("  Index directory: {}", directory.display())),
		None => lines.push("  Index directory: (not indexing)".to_string()),
	}
	match &config.plan.query {
		Some(query) => lines.push(format!("  Search query: '{query}'")),
		None => lines.push("  Search query: (not searching)".to_string()),
	}
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
