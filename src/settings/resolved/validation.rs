use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let index_path = &config.index.index_path;

	if index_path.as_os_str().is_empty() {
		return Err(ConfigError::invalid(
			"index.path",
			String::new(),
			sources.index_path,
			"must not be empty",
		));
	}

	if index_path.is_dir() {
		return Err(ConfigError::invalid(
			"index.path",
			index_path.display().to_string(),
			sources.index_path,
			"must name a file, not a directory",
		));
	}

	Ok(())
}
