use std::env;
use std::fmt;

use crate::cli::CliArgs;

/// Environment variable that sets `index.path`.
pub(crate) const INDEX_PATH_ENV: &str = "FSINDEX__INDEX__PATH";

/// The configuration layer that supplied a setting's effective value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SettingSource {
	#[default]
	BuiltIn,
	ConfigFile(&'static str),
	Environment(&'static str),
	CliFlag(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::BuiltIn => f.write_str("the built-in default"),
			Self::ConfigFile(key) => write!(f, "config key `{key}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::CliFlag(flag) => write!(f, "`{flag}`"),
		}
	}
}

/// Origins of the settings that validation can reject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ConfigSources {
	pub(crate) index_path: SettingSource,
}

impl ConfigSources {
	/// Attribute each setting to the highest layer that could have set it.
	///
	/// `index_path_set` reports whether any layer produced an `index.path` value.
	pub(crate) fn detect(cli: &CliArgs, index_path_set: bool) -> Self {
		let index_path = if cli.index_file.is_some() {
			SettingSource::CliFlag("--index-file")
		} else if !index_path_set {
			SettingSource::BuiltIn
		} else if env::var_os(INDEX_PATH_ENV).is_some() {
			SettingSource::Environment(INDEX_PATH_ENV)
		} else {
			SettingSource::ConfigFile("index.path")
		};
		Self { index_path }
	}
}
