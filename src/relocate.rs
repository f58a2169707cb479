use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::MetadataError;

/// What a relocation did, beyond the move itself.
///
/// Directory pruning after the move is best-effort: a directory that is
/// still occupied (or cannot be removed for any other reason) stops the
/// climb without raising an error. Callers that care can inspect
/// `pruned_dirs` instead of catching exceptions.
#[derive(Debug)]
pub struct RelocateOutcome {
    /// Where the file ended up.
    pub new_path: PathBuf,
    /// Source-side directories removed because the move emptied them,
    /// innermost first.
    pub pruned_dirs: Vec<PathBuf>,
}

/// Move a file, creating destination directories and pruning emptied
/// source directories.
///
/// The destination's parent directories are created first (recursive,
/// idempotent). The move itself is a plain rename; its I/O failures
/// propagate. After the move, the old path's parent and each now-empty
/// ancestor are removed until the first non-empty one. The move and the
/// cleanup are not atomic together; an interruption in between leaves
/// the file moved and the old directory tree intact.
pub fn relocate(
    old_path: impl AsRef<Path>,
    new_path: impl AsRef<Path>,
) -> Result<RelocateOutcome, MetadataError> {
    let old_path = old_path.as_ref();
    let new_path = new_path.as_ref();
    if let Some(parent) = new_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::rename(old_path, new_path)?;
    Ok(RelocateOutcome {
        new_path: new_path.to_path_buf(),
        pruned_dirs: prune_empty_ancestors(old_path.parent()),
    })
}

/// Remove `start` and its ancestors while they are empty.
///
/// `fs::remove_dir` refuses non-empty directories, so the first
/// occupied ancestor ends the climb; that refusal (and any other
/// removal failure) is expected and only logged.
fn prune_empty_ancestors(start: Option<&Path>) -> Vec<PathBuf> {
    let mut pruned = Vec::new();
    let mut current = start;
    while let Some(dir) = current {
        if dir.as_os_str().is_empty() {
            break;
        }
        match fs::remove_dir(dir) {
            Ok(()) => {
                debug!(dir = %dir.display(), "pruned empty directory");
                pruned.push(dir.to_path_buf());
                current = dir.parent();
            }
            Err(err) => {
                debug!(dir = %dir.display(), error = %err, "leaving directory in place");
                break;
            }
        }
    }
    pruned
}
