mod error;
mod grouper;
mod scanner;
mod walker;

pub use error::{Result, ScanError};
pub use grouper::{ConflictGroup, conflict_groups, group, resolve_base, split_extension};
pub use scanner::{ConflictScanner, ConflictSet, ScanMode, ScanReport};
pub use walker::{DirectoryListing, walk_directories};
