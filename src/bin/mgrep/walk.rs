//! Turns the path arguments given on the command line into a flat, ordered
//! list of files to search.
//!
//! A bare file argument is taken as-is. A directory argument is only
//! accepted under `-r`/`--recursive`, in which case it is descended with a
//! manual `std::fs::read_dir` recursion (the tree here is shallow enough
//! that a dependency pulling in its own directory iterator isn't worth
//! adding).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Resolves `paths` into a flat list of files to search, in the order
/// given (directories expand into their contents in `read_dir` order).
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        collect_one(path, recursive, &mut files)?;
    }
    Ok(files)
}

fn collect_one(path: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    let meta = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?;
    if meta.is_file() {
        log::trace!("queuing file {}", path.display());
        files.push(path.to_path_buf());
        return Ok(());
    }
    if !meta.is_dir() {
        bail!("{} is neither a file nor a directory", path.display());
    }
    if !recursive {
        bail!("{} is a directory (use -r to search recursively)", path.display());
    }
    log::debug!("descending into {}", path.display());
    let mut entries: Vec<PathBuf> = fs::read_dir(path)
        .with_context(|| format!("failed to read directory {}", path.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("failed to read directory {}", path.display()))?;
    entries.sort();
    for entry in entries {
        collect_one(&entry, recursive, files)?;
    }
    Ok(())
}

/// Renders `path` with forward slashes for the `<path>:`-prefixed output
/// format, regardless of the platform's native separator. `path` already
/// carries whatever relativity the caller typed on the command line (a
/// relative root argument walks into relative entry paths), so no
/// additional root-stripping is needed here.
pub fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir, File};
    use tempfile::tempdir;

    #[test]
    fn single_file_is_queued_as_is() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        File::create(&file).unwrap();
        let files = collect_files(&[file.clone()], false).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn directory_without_recursive_flag_errors() {
        let dir = tempdir().unwrap();
        assert!(collect_files(&[dir.path().to_path_buf()], false).is_err());
    }

    #[test]
    fn directory_with_recursive_flag_descends() {
        let dir = tempdir().unwrap();
        create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        File::create(dir.path().join("sub").join("b.txt")).unwrap();

        let files = collect_files(&[dir.path().to_path_buf()], true).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn display_path_uses_forward_slashes() {
        let path = Path::new("sub").join("file.txt");
        assert_eq!(display_path(&path), "sub/file.txt");
    }
}
