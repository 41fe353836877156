mod options;
mod traversal;

pub use options::{EXCLUDED_PREFIX, FilesystemOptions};
pub use traversal::{FileEntry, walk_files};
