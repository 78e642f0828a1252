//! Module search-path construction for the trainer's environment
//!
//! The trainer resolves its own libraries through a search-path
//! variable. The launcher prepends the two sibling library directories
//! shipped next to the trainer, ahead of whatever the variable already
//! held, preserving the pre-existing order.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Module-resolution search-path variable consumed by the trainer.
pub const SEARCH_PATH_VAR: &str = "PYTHONPATH";

/// Sibling library directories prepended to the search path, in order.
pub const SIBLING_LIBS: [&str; 2] = ["rltools", "madrl_environments"];

/// Build the search-path value presented to the child process.
///
/// The two sibling directories under `base_dir` come first, in the
/// order of [`SIBLING_LIBS`]; any entries already present in `existing`
/// follow in their original order. An empty `existing` value behaves as
/// unset.
///
/// # Errors
///
/// Returns [`Error::SearchPath`] if an entry cannot be joined into a
/// single value (a path containing the platform's list separator).
pub fn extended_search_path(base_dir: &Path, existing: Option<&OsStr>) -> Result<OsString> {
    let mut entries: Vec<PathBuf> = SIBLING_LIBS.iter().map(|lib| base_dir.join(lib)).collect();
    if let Some(existing) = existing {
        if !existing.is_empty() {
            entries.extend(env::split_paths(existing));
        }
    }
    env::join_paths(entries).map_err(|e| Error::SearchPath(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn entries(value: &OsStr) -> Vec<PathBuf> {
        env::split_paths(value).collect()
    }

    #[test]
    fn test_siblings_prepended_to_empty() {
        let path = extended_search_path(Path::new("/opt/cas"), None).expect("joinable");
        assert_eq!(
            entries(&path),
            vec![
                PathBuf::from("/opt/cas/rltools"),
                PathBuf::from("/opt/cas/madrl_environments"),
            ]
        );
    }

    #[test]
    fn test_existing_entries_follow_in_order() {
        let existing = env::join_paths(["/usr/lib/py", "/home/u/site"]).expect("joinable");
        let path = extended_search_path(Path::new("."), Some(&existing)).expect("joinable");
        assert_eq!(
            entries(&path),
            vec![
                PathBuf::from("./rltools"),
                PathBuf::from("./madrl_environments"),
                PathBuf::from("/usr/lib/py"),
                PathBuf::from("/home/u/site"),
            ]
        );
    }

    #[test]
    fn test_empty_existing_behaves_as_unset() {
        let unset = extended_search_path(Path::new("/x"), None).expect("joinable");
        let empty = extended_search_path(Path::new("/x"), Some(&OsString::new())).expect("joinable");
        assert_eq!(unset, empty);
    }
}
