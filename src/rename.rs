use crate::errors::RefactorError;
use crate::transform::TextTransform;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Renames each file within its own directory by running `transform` over the
/// base name. A transform that leaves the name unchanged still performs the
/// move, which renames a file onto itself and succeeds. Returns the new paths
/// in input order.
pub fn rename_files<T: TextTransform>(
    files: &[PathBuf],
    transform: &T,
) -> Result<Vec<PathBuf>, RefactorError> {
    let mut renamed = Vec::with_capacity(files.len());
    for filepath in files {
        let dirname = filepath.parent().unwrap_or_else(|| Path::new(""));
        let basename = filepath
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let outpath = dirname.join(transform.apply(&basename));
        fs::rename(filepath, &outpath)?;

        info!("Renamed: {} -> {}", filepath.display(), outpath.display());
        renamed.push(outpath);
    }
    Ok(renamed)
}
