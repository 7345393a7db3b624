use crate::errors::RefactorError;
use filetime::{set_file_times, FileTime};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Copies `files` into `dest`, mirroring their directory layout relative to
/// `start`. Missing parent directories are created; existing ones are fine.
/// Symlinks are followed at the source, and permissions plus access and
/// modification times carry over to the copy. Returns the destination paths
/// in input order.
///
/// A failed copy aborts with whatever was already written left in place;
/// partial output trees are accepted.
pub fn clone_tree(
    files: &[PathBuf],
    dest: &Path,
    start: &Path,
) -> Result<Vec<PathBuf>, RefactorError> {
    let mut output_files = Vec::with_capacity(files.len());
    for file in files {
        let relpath = file.strip_prefix(start).map_err(|_| {
            RefactorError::IoError(format!(
                "{} is not under the input directory {}",
                file.display(),
                start.display()
            ))
        })?;
        let output_path = dest.join(relpath);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(file, &output_path)?;
        apply_metadata(file, &output_path)?;

        info!("{} => {}", file.display(), output_path.display());
        output_files.push(output_path);
    }
    Ok(output_files)
}

fn apply_metadata(src: &Path, dst: &Path) -> Result<(), std::io::Error> {
    let meta = fs::metadata(src)?;
    fs::set_permissions(dst, meta.permissions())?;
    set_file_times(
        dst,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )?;
    Ok(())
}
