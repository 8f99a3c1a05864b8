//! Groups the files of one directory by the name they collapse to once sync
//! conflict suffixes are stripped.
//!
//! `report-conflict-1.txt` collapses to `report-conflict.txt` only if that
//! sibling exists, and from there to `report.txt` only if that one exists
//! too. The chain stops at the first missing link.

use std::collections::{BTreeMap, HashSet};

/// A base filename and every filename in the directory that collapses to it,
/// in ascending order. The base itself is always a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGroup {
    pub base: String,
    pub members: Vec<String>,
}

impl ConflictGroup {
    pub fn is_conflict(&self) -> bool {
        self.members.len() > 1
    }

    /// Members other than the base.
    pub fn conflicts(&self) -> impl Iterator<Item = &str> {
        self.members
            .iter()
            .map(String::as_str)
            .filter(move |name| *name != self.base)
    }
}

/// Splits `name` at its last dot into stem and extension, the extension
/// keeping its dot. Leading dots never start an extension, so `.bashrc` and
/// `..` have none.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => (&name[..dot], &name[dot..]),
        _ => (name, ""),
    }
}

/// The name one suffix up the chain: `a-b-c.txt` -> `a-b.txt`.
fn parent_candidate(name: &str) -> Option<String> {
    let (stem, extension) = split_extension(name);
    let (prefix, suffix) = stem.rsplit_once('-')?;

    if suffix.is_empty() {
        return None;
    }

    Some(format!("{prefix}{extension}"))
}

/// Walks up the suffix chain while each candidate exists among `siblings`.
pub fn resolve_base(filename: &str, siblings: &HashSet<&str>) -> String {
    let mut base = filename.to_string();

    // Each candidate is strictly shorter than the name it came from.
    while let Some(candidate) = parent_candidate(&base) {
        if !siblings.contains(candidate.as_str()) {
            break;
        }
        base = candidate;
    }

    base
}

/// Maps every base filename to the filenames that collapse to it.
pub fn group<S: AsRef<str>>(filenames: &[S]) -> BTreeMap<String, Vec<String>> {
    let siblings: HashSet<&str> = filenames.iter().map(|name| name.as_ref()).collect();

    let mut sorted: Vec<&str> = siblings.iter().copied().collect();
    sorted.sort_unstable();

    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for filename in sorted {
        groups
            .entry(resolve_base(filename, &siblings))
            .or_default()
            .push(filename.to_string());
    }

    groups
}

/// Only the groups with more than one member, ordered by base name.
pub fn conflict_groups<S: AsRef<str>>(filenames: &[S]) -> Vec<ConflictGroup> {
    group(filenames)
        .into_iter()
        .map(|(base, members)| ConflictGroup { base, members })
        .filter(ConflictGroup::is_conflict)
        .collect()
}
