use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects files under `root` whose name ends with one of
/// `extensions`.
///
/// Symlinks are not followed and results come back in walk order. The
/// caller is expected to have checked that `root` is a directory.
///
/// # Returns
/// * `Ok(paths)` - Matching files, possibly empty
/// * `Err(ConversionError::WalkdirError)` - If part of the tree cannot be read
pub fn find_image_files<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && has_extension(path, extensions) {
            image_files.push(path.to_path_buf());
        }
    }

    Ok(image_files)
}

/// Case-sensitive suffix match on the file name.
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            extensions.iter().any(|ext| name.ends_with(ext.as_ref()))
        })
        .unwrap_or(false)
}

/// Swaps the last `.ext` of the file name for `.{extension}`.
///
/// A name without an extension (including dot-files such as `.png`) gets the
/// new extension appended.
pub fn replace_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}
