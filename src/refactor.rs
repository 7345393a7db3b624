use crate::errors::RefactorError;
use crate::transform::TextTransform;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::info;

/// Rewrites each file line by line through `transform`. Line endings are
/// preserved; the transform sees each line including its terminator.
pub fn refactor_lines<T: TextTransform>(
    files: &[PathBuf],
    transform: &T,
) -> Result<(), RefactorError> {
    for filepath in files {
        rewrite_file(filepath, |content| {
            let mut out = String::with_capacity(content.len());
            for line in content.split_inclusive('\n') {
                out.push_str(&transform.apply(line));
            }
            out
        })?;
        info!("Refactored: {}", filepath.display());
    }
    Ok(())
}

/// Rewrites each file in a single pass, for transforms whose pattern must
/// match across line boundaries.
pub fn refactor_whole<T: TextTransform>(
    files: &[PathBuf],
    transform: &T,
) -> Result<(), RefactorError> {
    for filepath in files {
        rewrite_file(filepath, |content| transform.apply(content))?;
        info!("Refactored: {}", filepath.display());
    }
    Ok(())
}

// Writes the rewritten content to a temporary file in the target's own
// directory, then persists it over the original. Same-directory placement
// keeps the final move a rename rather than a cross-device copy.
fn rewrite_file<F>(filepath: &Path, rewrite: F) -> Result<(), RefactorError>
where
    F: FnOnce(&str) -> String,
{
    let content = read_text(filepath)?;

    let parent = filepath.parent().unwrap_or_else(|| Path::new("."));
    let basename = filepath
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut tmp = Builder::new().prefix(&basename).tempfile_in(parent)?;
    tmp.write_all(rewrite(&content).as_bytes())?;
    tmp.flush()?;
    tmp.persist(filepath)?;
    Ok(())
}

fn read_text(filepath: &Path) -> Result<String, RefactorError> {
    fs::read_to_string(filepath).map_err(|e| {
        if e.kind() == io::ErrorKind::InvalidData {
            RefactorError::EncodingError(filepath.display().to_string())
        } else {
            RefactorError::IoError(e.to_string())
        }
    })
}
