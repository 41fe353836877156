use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use fsindex::DEFAULT_INDEX_FILE;
use fsindex::logging::LOG_ENV;

use crate::settings::user_config_file;

/// Version banner listing where `fsindex` reads and writes by default.
pub(super) fn long_version() -> &'static str {
	let user_config = user_config_file()
		.map_or_else(|| "unavailable".to_string(), |path| path.display().to_string());

	let banner = [
		format!("fsindex {}", env!("CARGO_PKG_VERSION")),
		format!("index table: ./{DEFAULT_INDEX_FILE} (override with --index-file)"),
		format!("user config: {user_config}"),
		"project config: ./.fsindex.toml, ./fsindex.toml".to_string(),
		format!("log filter: ${LOG_ENV}"),
	]
	.join("\n");

	Box::leak(banner.into_boxed_str())
}

/// Colours for help and usage errors.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Yellow.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Red.on_default())
}
