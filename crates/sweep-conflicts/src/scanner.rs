use crate::grouper::conflict_groups;
use crate::walker::walk_directories;
use crate::{Result, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    #[default]
    DryRun,
    Delete,
}

/// An original file and its conflicting copies within one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictSet {
    pub directory: PathBuf,
    pub original: PathBuf,
    pub conflicts: Vec<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub sets: Vec<ConflictSet>,
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
    /// Conflicts left in place because their original was gone by delete time.
    pub kept: Vec<PathBuf>,
}

impl ScanReport {
    pub fn found_duplicates(&self) -> bool {
        !self.sets.is_empty()
    }
}

pub struct ConflictScanner {
    mode: ScanMode,
}

impl ConflictScanner {
    pub fn new(mode: ScanMode) -> Self {
        Self { mode }
    }

    pub fn scan(&self, root: &Path) -> ScanReport {
        let display_root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

        match self.mode {
            ScanMode::Delete => {
                info!(
                    "Starting scan and DELETE in directory: {}",
                    display_root.display()
                );
                warn!("DELETE MODE IS ACTIVE. CONFLICT FILES WILL BE REMOVED.");
            }
            ScanMode::DryRun => info!(
                "Starting scan in directory: {} (dry run)",
                display_root.display()
            ),
        }

        let mut report = ScanReport::default();

        for listing in walk_directories(root) {
            for group in conflict_groups(listing.filenames.as_slice()) {
                let set = ConflictSet {
                    original: listing.path.join(&group.base),
                    conflicts: group
                        .conflicts()
                        .map(|name| listing.path.join(name))
                        .collect(),
                    directory: listing.path.clone(),
                };

                report_set(&set);

                if self.mode == ScanMode::Delete {
                    self.apply(&set, &mut report);
                }

                report.sets.push(set);
            }
        }

        if !report.found_duplicates() {
            info!("Scan complete. No duplicate files found matching the conflict pattern.");
        } else if self.mode == ScanMode::Delete {
            info!(
                "Scan and deletion complete: {} deleted, {} failed, {} kept",
                report.deleted.len(),
                report.failed.len(),
                report.kept.len()
            );
        } else {
            info!("Scan complete. No files were changed. (Use --delete to remove conflicts)");
        }

        report
    }

    /// Removes the conflicts of one set, recording each outcome in `report`.
    ///
    /// Nothing is removed when the original is no longer on disk. A failed
    /// removal is logged and the remaining conflicts are still attempted.
    pub fn apply(&self, set: &ConflictSet, report: &mut ScanReport) {
        if !set.original.exists() {
            warn!(
                "  - Original {} no longer exists, keeping its conflicts",
                set.original.display()
            );
            report.kept.extend(set.conflicts.iter().cloned());
            return;
        }

        info!("  - Deleting conflicts...");

        for path in &set.conflicts {
            match remove_conflict(path) {
                Ok(()) => {
                    info!("    - Deleted: {}", path.display());
                    report.deleted.push(path.clone());
                }
                Err(e) => {
                    warn!("    - Error deleting {}", e);
                    report.failed.push(path.clone());
                }
            }
        }
    }
}

fn report_set(set: &ConflictSet) {
    info!(
        "Found duplicate set in directory: {}",
        set.directory.display()
    );
    info!("  - Original: {}", set.original.display());
    for conflict in &set.conflicts {
        info!("  - Conflict: {}", conflict.display());
    }
}

fn remove_conflict(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_apply_keeps_conflicts_when_original_missing() {
        let dir = tempdir().unwrap();
        let conflict = dir.path().join("a-conflict.txt");
        touch(&conflict);

        let set = ConflictSet {
            directory: dir.path().to_path_buf(),
            original: dir.path().join("a.txt"),
            conflicts: vec![conflict.clone()],
        };

        let mut report = ScanReport::default();
        ConflictScanner::new(ScanMode::Delete).apply(&set, &mut report);

        assert!(conflict.exists());
        assert_eq!(report.kept, vec![conflict]);
        assert!(report.deleted.is_empty());
    }

    #[test]
    fn test_apply_continues_after_failed_removal() {
        let dir = tempdir().unwrap();
        let original = dir.path().join("a.txt");
        let gone = dir.path().join("a-gone.txt");
        let present = dir.path().join("a-present.txt");
        touch(&original);
        touch(&present);

        let set = ConflictSet {
            directory: dir.path().to_path_buf(),
            original: original.clone(),
            conflicts: vec![gone.clone(), present.clone()],
        };

        let mut report = ScanReport::default();
        ConflictScanner::new(ScanMode::Delete).apply(&set, &mut report);

        assert_eq!(report.failed, vec![gone]);
        assert_eq!(report.deleted, vec![present.clone()]);
        assert!(!present.exists());
        assert!(original.exists());
    }

    #[test]
    fn test_default_mode_is_dry_run() {
        assert_eq!(ScanMode::default(), ScanMode::DryRun);
    }
}
