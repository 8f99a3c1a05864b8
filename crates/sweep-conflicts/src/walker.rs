use crate::{Result, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// One directory and the names of the files directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub path: PathBuf,
    pub filenames: Vec<String>,
}

/// Visits every directory under `root` (root included) in sorted order.
///
/// Symlinks are not followed. Directories without files are skipped, and
/// unreadable ones are logged and skipped.
pub fn walk_directories(root: &Path) -> impl Iterator<Item = DirectoryListing> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable path: {}", ScanError::from(e));
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| match list_files(entry.path()) {
            Ok(filenames) if filenames.is_empty() => None,
            Ok(filenames) => Some(DirectoryListing {
                path: entry.into_path(),
                filenames,
            }),
            Err(e) => {
                warn!("Skipping directory {}", e);
                None
            }
        })
}

/// Names of the non-directory entries of `dir`, sorted. A symlink to a
/// directory counts as a directory; a dangling symlink counts as a file.
fn list_files(dir: &Path) -> Result<Vec<String>> {
    let io_error = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut filenames = Vec::new();

    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let file_type = entry.file_type().map_err(io_error)?;

        if file_type.is_dir() {
            continue;
        }

        if file_type.is_symlink()
            && fs::metadata(entry.path()).is_ok_and(|target| target.is_dir())
        {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => filenames.push(name),
            Err(name) => debug!("Skipping non UTF-8 filename {:?} in {:?}", name, dir),
        }
    }

    filenames.sort_unstable();
    Ok(filenames)
}
