use std::fs::{self, Metadata};
use std::io;
use std::path::{Component, Path, PathBuf};

use ignore::{DirEntry, Error as IgnoreError, WalkBuilder};

use crate::error::{IndexError, Result};

use super::FilesystemOptions;

/// A non-directory entry discovered during traversal.
#[derive(Debug)]
pub struct FileEntry {
	/// The lexically cleaned root joined with the entry's relative path.
	pub path: PathBuf,
	pub metadata: Metadata,
}

/// Visit every non-excluded, non-directory entry below `root`, depth first.
///
/// Siblings are visited in byte-wise file name order, so the visitation order
/// only depends on the tree's contents. Excluded directories are pruned
/// without being read; a root whose own name is excluded yields nothing.
/// Yielded paths are built on the cleaned root, so `.` yields `a.txt` and
/// `./data/` yields `data/a.txt`. The first error, from the walk itself or
/// from `visit`, stops the traversal and is returned unchanged.
pub fn walk_files<F>(root: &Path, options: &FilesystemOptions, mut visit: F) -> Result<()>
where
	F: FnMut(FileEntry) -> Result<()>,
{
	let root_metadata = fs::metadata(root).map_err(|err| IndexError::traversal(root, err))?;
	if !root_metadata.is_dir() {
		return Err(IndexError::traversal(
			root,
			io::Error::new(io::ErrorKind::NotADirectory, "index root is not a directory"),
		));
	}

	let base = clean_path(root);
	if base
		.file_name()
		.is_some_and(|name| options.is_excluded(name))
	{
		return Ok(());
	}

	let filter_options = options.clone();
	let walker = WalkBuilder::new(root)
		.standard_filters(false)
		.follow_links(options.follow_symlinks)
		.sort_by_file_name(|left, right| left.cmp(right))
		// The root is yielded unconditionally; only descendants reach the filter.
		.filter_entry(move |entry| !filter_options.is_excluded(entry.file_name()))
		.build();

	for entry in walker {
		let entry = entry.map_err(|err| traversal_error(root, err))?;
		if is_directory(&entry) {
			continue;
		}

		let path = rebase(root, &base, entry.path());
		let metadata = entry
			.metadata()
			.map_err(|err| IndexError::file_access(&path, into_io_error(err)))?;
		visit(FileEntry { path, metadata })?;
	}

	Ok(())
}

/// Lexically normalise `path`: drop `.` segments and fold `name/..` pairs.
///
/// The filesystem is never consulted. A path that cleans to nothing (such as
/// `.`) becomes empty, so joining onto it yields bare relative paths.
fn clean_path(path: &Path) -> PathBuf {
	let mut cleaned = PathBuf::new();
	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				if matches!(cleaned.components().next_back(), Some(Component::Normal(_))) {
					cleaned.pop();
				} else if !cleaned.has_root() {
					cleaned.push(component);
				}
			}
			other => cleaned.push(other),
		}
	}
	cleaned
}

fn rebase(root: &Path, base: &Path, path: &Path) -> PathBuf {
	match path.strip_prefix(root) {
		Ok(relative) => base.join(relative),
		Err(_) => path.to_path_buf(),
	}
}

fn is_directory(entry: &DirEntry) -> bool {
	entry.file_type().is_some_and(|file_type| file_type.is_dir())
}

fn traversal_error(root: &Path, err: IgnoreError) -> IndexError {
	let path = error_path(&err).unwrap_or_else(|| root.to_path_buf());
	IndexError::traversal(path, into_io_error(err))
}

/// Find the path an `ignore` error refers to, looking through its wrappers.
fn error_path(err: &IgnoreError) -> Option<PathBuf> {
	match err {
		IgnoreError::WithPath { path, .. } => Some(path.clone()),
		IgnoreError::WithDepth { err, .. } | IgnoreError::WithLineNumber { err, .. } => {
			error_path(err)
		}
		IgnoreError::Loop { child, .. } => Some(child.clone()),
		_ => None,
	}
}

fn into_io_error(err: IgnoreError) -> io::Error {
	let message = err.to_string();
	err.into_io_error().unwrap_or_else(|| io::Error::other(message))
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	fn collect(root: &Path) -> Result<Vec<PathBuf>> {
		let mut seen = Vec::new();
		walk_files(root, &FilesystemOptions::default(), |entry| {
			seen.push(entry.path);
			Ok(())
		})?;
		Ok(seen)
	}

	#[test]
	fn visits_files_depth_first_in_name_order() {
		let dir = tempdir().unwrap();
		let root = dir.path();
		fs::create_dir_all(root.join("b/inner")).unwrap();
		fs::create_dir_all(root.join("a")).unwrap();
		fs::write(root.join("c.txt"), "c").unwrap();
		fs::write(root.join("b/inner/z.txt"), "z").unwrap();
		fs::write(root.join("b/y.txt"), "y").unwrap();
		fs::write(root.join("a/x.txt"), "x").unwrap();
		fs::write(root.join("B.txt"), "upper sorts first").unwrap();

		let seen = collect(root).unwrap();
		let expected: Vec<PathBuf> = ["B.txt", "a/x.txt", "b/inner/z.txt", "b/y.txt", "c.txt"]
			.iter()
			.map(|rel| root.join(rel))
			.collect();
		assert_eq!(seen, expected);
	}

	#[test]
	fn git_prefixed_entries_and_subtrees_are_skipped() {
		let dir = tempdir().unwrap();
		let root = dir.path();
		fs::create_dir_all(root.join(".git/objects")).unwrap();
		fs::write(root.join(".git/HEAD"), "ref").unwrap();
		fs::write(root.join(".git/objects/ab"), "blob").unwrap();
		fs::create_dir_all(root.join(".github/workflows")).unwrap();
		fs::write(root.join(".github/workflows/ci.yml"), "on: push").unwrap();
		fs::write(root.join(".gitignore"), "target").unwrap();
		fs::write(root.join("keep.txt"), "keep").unwrap();

		let seen = collect(root).unwrap();
		assert_eq!(seen, vec![root.join("keep.txt")]);
	}

	#[test]
	fn hidden_and_ignored_files_are_still_visited() {
		let dir = tempdir().unwrap();
		let root = dir.path();
		fs::write(root.join(".ignore"), "skipped.txt\n").unwrap();
		fs::write(root.join(".env"), "KEY=1").unwrap();
		fs::write(root.join("skipped.txt"), "present").unwrap();

		let seen = collect(root).unwrap();
		assert_eq!(
			seen,
			vec![root.join(".env"), root.join(".ignore"), root.join("skipped.txt")]
		);
	}

	#[test]
	fn excluded_root_is_not_descended() {
		let dir = tempdir().unwrap();
		let root = dir.path().join(".github");
		fs::create_dir_all(root.join("workflows")).unwrap();
		fs::write(root.join("workflows/ci.yml"), "on: push").unwrap();

		assert!(collect(&root).unwrap().is_empty());
		assert!(collect(&root.join(".")).unwrap().is_empty());
	}

	#[test]
	fn dotted_root_segments_are_cleaned_from_yielded_paths() {
		let dir = tempdir().unwrap();
		fs::create_dir_all(dir.path().join("data/inner")).unwrap();
		fs::write(dir.path().join("data/a.txt"), "a").unwrap();

		let root = dir.path().join("./data/inner/../");
		let seen: Vec<String> = collect(&root)
			.unwrap()
			.iter()
			.map(|path| path.to_string_lossy().into_owned())
			.collect();

		let expected = dir.path().join("data").join("a.txt");
		assert_eq!(seen, vec![expected.to_string_lossy().into_owned()]);
	}

	#[cfg(unix)]
	#[test]
	fn clean_path_matches_lexical_rules() {
		let cleaned = |raw: &str| clean_path(Path::new(raw)).to_string_lossy().into_owned();
		assert_eq!(cleaned("."), "");
		assert_eq!(cleaned("./"), "");
		assert_eq!(cleaned("./data/"), "data");
		assert_eq!(cleaned("a/./b/../c"), "a/c");
		assert_eq!(cleaned("../x"), "../x");
		assert_eq!(cleaned("a/../.."), "..");
		assert_eq!(cleaned("/.."), "/");
		assert_eq!(cleaned("/tmp//x/"), "/tmp/x");
	}

	#[test]
	fn relative_paths_rebase_onto_the_cleaned_root() {
		assert_eq!(
			rebase(Path::new("."), Path::new(""), Path::new("./a.txt")),
			PathBuf::from("a.txt")
		);
		assert_eq!(
			rebase(Path::new("./data/"), Path::new("data"), Path::new("./data/b/c.txt"))
				.to_string_lossy(),
			PathBuf::from("data").join("b").join("c.txt").to_string_lossy()
		);
	}

	#[test]
	fn missing_root_is_a_traversal_error() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("missing");

		let err = collect(&missing).unwrap_err();
		match err {
			IndexError::Traversal { path, source } => {
				assert_eq!(path, missing);
				assert_eq!(source.kind(), io::ErrorKind::NotFound);
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn file_root_is_rejected() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("plain.txt");
		fs::write(&file, "data").unwrap();

		let err = collect(&file).unwrap_err();
		assert!(matches!(err, IndexError::Traversal { .. }));
	}

	#[test]
	fn visitor_errors_stop_the_walk() {
		let dir = tempdir().unwrap();
		let root = dir.path();
		fs::write(root.join("a.txt"), "a").unwrap();
		fs::write(root.join("b.txt"), "b").unwrap();

		let mut visited = 0;
		let err = walk_files(root, &FilesystemOptions::default(), |entry| {
			visited += 1;
			Err(IndexError::file_access(
				entry.path,
				io::Error::other("sample failed"),
			))
		})
		.unwrap_err();

		assert_eq!(visited, 1);
		assert!(matches!(err, IndexError::FileAccess { .. }));
	}
}
