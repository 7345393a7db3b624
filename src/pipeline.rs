use crate::classify::classify;
use crate::clone::clone_tree;
use crate::errors::RefactorError;
use crate::refactor::{refactor_lines, refactor_whole};
use crate::rename::rename_files;
use crate::transform::{NameSubstitution, ReadmeInjection};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// One run of the template rename: where to read, where to write, and the
/// old and new project names.
pub struct RefactorConfig {
    pub input_directory: PathBuf,
    pub output_directory: PathBuf,
    pub project_name: String,
    pub new_name: String,
    pub readme_content: String,
}

/// Clones the input tree into the output directory, rewrites project-name
/// occurrences in the classified buckets, injects the README introduction,
/// renames source files, and reports a tally. Any stage error aborts the run;
/// already-written output stays on disk.
pub fn run_refactor(config: RefactorConfig) -> Result<(), RefactorError> {
    fs::create_dir_all(&config.output_directory)?;
    let output_directory = fs::canonicalize(&config.output_directory)?;
    let input_directory = fs::canonicalize(&config.input_directory)?;

    // The tool must never copy or rewrite its own binary, even when run from
    // inside the input tree.
    let self_path = env::current_exe()
        .ok()
        .and_then(|p| fs::canonicalize(p).ok());
    let mut buckets = classify(&input_directory, self_path.as_deref())?;

    info!("1. Cloning files");
    for (name, files) in buckets.copy_targets_mut() {
        debug!("Cloning bucket: {}", name);
        *files = clone_tree(files, &output_directory, &input_directory)?;
    }

    info!("2. Refactoring file contents");
    let substitution = NameSubstitution::new(&config.project_name, &config.new_name)?;
    for (name, files) in buckets.refactor_targets() {
        debug!("Refactoring bucket: {}", name);
        refactor_lines(files, &substitution)?;
    }

    let injection = ReadmeInjection::new(&config.readme_content)?;
    refactor_whole(&buckets.readme, &injection)?;

    info!("3. Renaming files");
    buckets.src = rename_files(&buckets.src, &substitution)?;

    info!("Total no. of files in src:  {}", buckets.total_seen);
    info!("Total no. of files ignored: {}", buckets.ignored.len());
    info!("Total no. of files copied:  {}", buckets.copied_count());
    info!("No. of files refactored:    {}", buckets.refactored_count());
    info!("No. of files renamed:       {}", buckets.src.len());
    info!("Output directory:           {}", output_directory.display());
    Ok(())
}
