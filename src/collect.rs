use crate::errors::RefactorError;
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

// `*` and `[..]` must not cross `/`, while `**` still spans directories.
// Leading dots are plain characters so hidden files are discovered.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Collects absolute paths of regular files under `root` matching any of the
/// recursive glob `patterns` (`**` supported). Patterns are matched against
/// the path relative to `root`, so a root whose own name contains glob
/// metacharacters is handled like any other directory. A nonexistent root
/// yields an empty set rather than an error. Symlinked directories are not
/// followed while matching.
pub fn collect_paths(root: &Path, patterns: &[&str]) -> Result<Vec<PathBuf>, RefactorError> {
    let mut compiled = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        compiled.push(Pattern::new(pattern)?);
    }

    let files = walk_files(root)
        .into_iter()
        .filter(|path| {
            let relpath = match path.strip_prefix(root) {
                Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
                Err(_) => return false,
            };
            compiled
                .iter()
                .any(|p| p.matches_with(&relpath, MATCH_OPTIONS))
        })
        .collect();
    Ok(files)
}

/// Enumerates every regular file under `root`, hidden files included. This is
/// the same walk the pattern collector filters, so the two always agree on
/// which files exist.
pub fn collect_all_files(root: &Path) -> Vec<PathBuf> {
    walk_files(root)
}

fn walk_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if !root.is_dir() {
        return files;
    }

    for entry in walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        // path-based check so a symlink to a regular file counts as a file
        if entry.path().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    files
}
