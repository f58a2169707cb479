use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::codec::fname_to_metadata;
use crate::constants::walk::SKIP_UNMATCHED_MSG;
use crate::pattern::Pattern;
use crate::record::MetadataRecord;

/// Builds metadata records for every matching file under a root.
///
/// Walks the tree, keeps regular files (optionally filtered by
/// extension), sorts the candidates for deterministic output, and
/// parses each stem against the pattern. Files whose names do not match
/// are logged and skipped rather than failing the walk.
pub struct CorpusWalker {
    root: PathBuf,
    pattern: Pattern,
    extension: Option<String>,
    follow_links: bool,
}

impl CorpusWalker {
    /// Walk `root` matching stems against `pattern`.
    pub fn new(root: impl Into<PathBuf>, pattern: Pattern) -> Self {
        Self {
            root: root.into(),
            pattern,
            extension: None,
            follow_links: false,
        }
    }

    /// Keep only files with this extension (case-insensitive).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Configure symlink traversal.
    pub fn with_follow_symlinks(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Collect one record per matching file, each carrying its path in
    /// the filename field, in sorted path order.
    pub fn records(&self) -> Vec<MetadataRecord> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        let mut walker = WalkDir::new(&self.root);
        if self.follow_links {
            walker = walker.follow_links(true);
        }
        for entry in walker
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
        {
            let path = entry.path().to_path_buf();
            if !self.extension_matches(&path) {
                continue;
            }
            candidates.push(path);
        }
        candidates.sort();
        let mut records = Vec::new();
        for path in candidates {
            match fname_to_metadata(&path, &self.pattern) {
                Ok(mut record) => {
                    record.set_fname(path.to_string_lossy());
                    records.push(record);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, SKIP_UNMATCHED_MSG);
                }
            }
        }
        records
    }

    fn extension_matches(&self, path: &Path) -> bool {
        let Some(wanted) = &self.extension else {
            return true;
        };
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(wanted))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collects_matching_files_in_sorted_order() {
        let temp = tempdir().unwrap();
        let english = temp.path().join("English");
        let german = temp.path().join("German");
        fs::create_dir_all(&english).unwrap();
        fs::create_dir_all(&german).unwrap();
        fs::write(english.join("dickens_expectations.txt"), "x").unwrap();
        fs::write(german.join("goethe_novelle.txt"), "x").unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let pattern = Pattern::new("{author}_{title}").unwrap();
        let records = CorpusWalker::new(temp.path(), pattern).records();
        // 'notes' never matches; the two corpus files come back sorted.
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("author"), Some("dickens"));
        assert_eq!(records[1].get("author"), Some("goethe"));
        assert!(records[0].fname().unwrap().ends_with("dickens_expectations.txt"));
    }

    #[test]
    fn extension_filter_is_case_insensitive() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("dickens_expectations.TXT"), "x").unwrap();
        fs::write(temp.path().join("goethe_novelle.xml"), "x").unwrap();

        let pattern = Pattern::new("{author}_{title}").unwrap();
        let records = CorpusWalker::new(temp.path(), pattern)
            .with_extension("txt")
            .records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("author"), Some("dickens"));
    }
}
