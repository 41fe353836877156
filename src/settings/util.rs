use std::env;
use std::path::Path;

/// Render `path` as an absolute location, resolving relative paths against
/// the working directory without touching the filesystem.
pub(super) fn absolute_display(path: &Path) -> String {
	if path.is_absolute() {
		return path.display().to_string();
	}
	match env::current_dir() {
		Ok(current) => current.join(path).display().to_string(),
		Err(_) => path.display().to_string(),
	}
}
