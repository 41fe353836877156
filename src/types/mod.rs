//! Types shared between the indexer and the searcher.

mod record;

pub use record::{FileRecord, INDEX_HEADER};
