use std::env;
use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment, File};
use directories::ProjectDirs;

use crate::cli::CliArgs;

/// Prefix for environment overrides, e.g. `FSINDEX__INDEX__PATH`.
pub(super) const ENV_PREFIX: &str = "fsindex";

/// Environment variable that relocates the user configuration directory.
pub(crate) const CONFIG_DIR_ENV: &str = "FSINDEX_CONFIG_DIR";

/// Project-local files, relative to the working directory, in merge order.
const PROJECT_CONFIG_FILES: [&str; 2] = [".fsindex.toml", "fsindex.toml"];

/// Stack every configuration layer below the CLI flags.
///
/// Default locations are optional; files named with `--config` must exist.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.as_path()).required(true));
	}

	let env = Environment::with_prefix(ENV_PREFIX)
		.prefix_separator("__")
		.separator("__")
		.try_parsing(true);

	Ok(builder.add_source(env).build()?)
}

/// Location of the per-user `config.toml`, honouring [`CONFIG_DIR_ENV`].
pub(crate) fn user_config_file() -> Option<PathBuf> {
	let dir = match env::var_os(CONFIG_DIR_ENV).filter(|value| !value.is_empty()) {
		Some(dir) => PathBuf::from(dir),
		None => ProjectDirs::from("io", "fsindex", "fsindex")?
			.config_local_dir()
			.to_path_buf(),
	};
	Some(dir.join("config.toml"))
}

/// Default configuration files, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files: Vec<PathBuf> = user_config_file().into_iter().collect();
	if let Ok(cwd) = env::current_dir() {
		files.extend(PROJECT_CONFIG_FILES.iter().map(|name| cwd.join(name)));
	}
	files
}
