use crate::collect::{collect_all_files, collect_paths};
use crate::errors::RefactorError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CMAKE_PATTERNS: &[&str] = &["**/CMakeLists.txt"];
pub const SOURCE_PATTERNS: &[&str] = &["**/*.[ch]"];
pub const README_PATTERNS: &[&str] = &["README.md"];
pub const MISC_PATTERNS: &[&str] = &["**/.git*"];
pub const IGNORE_PATTERNS: &[&str] = &["**/.git/**/*", "**/.vscode/**/*"];

/// Mutually exclusive groups of files discovered under the input root.
/// Populated with source paths by [`classify`], then repopulated in place with
/// destination paths after cloning and again after renaming.
#[derive(Debug, Default)]
pub struct Buckets {
    pub cmake: Vec<PathBuf>,
    pub src: Vec<PathBuf>,
    pub readme: Vec<PathBuf>,
    pub misc: Vec<PathBuf>,
    pub everything_else: Vec<PathBuf>,
    pub ignored: Vec<PathBuf>,
    pub total_seen: usize,
}

impl Buckets {
    /// Buckets that get copied to the output directory, in classification order.
    pub fn copy_targets_mut(&mut self) -> Vec<(&'static str, &mut Vec<PathBuf>)> {
        vec![
            ("cmake", &mut self.cmake),
            ("src", &mut self.src),
            ("readme", &mut self.readme),
            ("misc", &mut self.misc),
            ("everything_else", &mut self.everything_else),
        ]
    }

    /// Buckets whose contents get the project-name substitution. The catch-all
    /// is copied verbatim and never rewritten.
    pub fn refactor_targets(&self) -> Vec<(&'static str, &[PathBuf])> {
        vec![
            ("cmake", self.cmake.as_slice()),
            ("src", self.src.as_slice()),
            ("readme", self.readme.as_slice()),
            ("misc", self.misc.as_slice()),
        ]
    }

    pub fn copied_count(&self) -> usize {
        self.cmake.len()
            + self.src.len()
            + self.readme.len()
            + self.misc.len()
            + self.everything_else.len()
    }

    pub fn refactored_count(&self) -> usize {
        self.cmake.len() + self.src.len() + self.readme.len() + self.misc.len()
    }
}

/// Partitions the files under `root` into buckets, in fixed priority order:
/// build definitions, C sources/headers, the top-level README, version-control
/// adjacent dotfiles, then a catch-all of everything not classified or ignored.
///
/// The ignore set (`.git/` and `.vscode/` internals plus `self_path`, the
/// running executable's own location) is excluded from every bucket and
/// never copied.
pub fn classify(root: &Path, self_path: Option<&Path>) -> Result<Buckets, RefactorError> {
    let mut ignored = collect_paths(root, IGNORE_PATTERNS)?;
    if let Some(own) = self_path {
        if !ignored.iter().any(|p| p == own) {
            ignored.push(own.to_path_buf());
        }
    }
    let ignored_set: BTreeSet<&PathBuf> = ignored.iter().collect();
    let not_ignored =
        |paths: Vec<PathBuf>| -> Vec<PathBuf> {
            paths
                .into_iter()
                .filter(|p| !ignored_set.contains(p))
                .collect()
        };

    let cmake = not_ignored(collect_paths(root, CMAKE_PATTERNS)?);
    let src = not_ignored(collect_paths(root, SOURCE_PATTERNS)?);
    let readme = not_ignored(collect_paths(root, README_PATTERNS)?);
    let misc = not_ignored(collect_paths(root, MISC_PATTERNS)?);

    let all_files = collect_all_files(root);
    let total_seen = all_files.len();

    let classified: BTreeSet<&PathBuf> = cmake
        .iter()
        .chain(&src)
        .chain(&readme)
        .chain(&misc)
        .chain(&ignored)
        .collect();
    let everything_else: Vec<PathBuf> = all_files
        .into_iter()
        .filter(|p| !classified.contains(p))
        .collect();

    debug!(
        "Classified {} files: {} cmake, {} src, {} readme, {} misc, {} other, {} ignored",
        total_seen,
        cmake.len(),
        src.len(),
        readme.len(),
        misc.len(),
        everything_else.len(),
        ignored.len()
    );

    Ok(Buckets {
        cmake,
        src,
        readme,
        misc,
        everything_else,
        ignored,
        total_seen,
    })
}
