//! Startup folder scan producing the ordered image set.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::CatalogError;

/// Ordered set of image files found in one directory.
///
/// Invariant: never empty. `scan_image_folder` refuses to build one from a
/// folder without displayable images, so every index in `[0, len)` is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    files: Vec<PathBuf>,
}

impl ImageSet {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Full path of the entry at `index`.
    pub fn path(&self, index: usize) -> &Path {
        &self.files[index]
    }

    /// Bare file name of the entry at `index`, the prediction-table key.
    pub fn file_name(&self, index: usize) -> &str {
        self.files[index]
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }
}

/// Scan `dir` (non-recursive) for `.jpg`/`.jpeg`/`.png` files, sorted by
/// file name. An empty result is `CatalogError::EmptyImageSet` naming the
/// scanned directory.
pub fn scan_image_folder(dir: impl AsRef<Path>) -> Result<ImageSet, CatalogError> {
    let root = dir.as_ref();
    if !root.is_dir() {
        return Err(CatalogError::NotADirectory(root.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("walkdir error: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_supported_image(path) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(CatalogError::EmptyImageSet(root.to_path_buf()));
    }
    Ok(ImageSet { files })
}

fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => {
            let ext = ext.to_ascii_lowercase();
            matches!(ext.as_str(), "jpg" | "jpeg" | "png")
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn scan_lists_only_images_sorted_by_name() -> Result<(), CatalogError> {
        let dir = tempdir()?;
        File::create(dir.path().join("b.jpeg"))?;
        File::create(dir.path().join("c.png"))?;
        File::create(dir.path().join("a.JPG"))?;
        File::create(dir.path().join("not-image.txt"))?;
        File::create(dir.path().join("no_extension"))?;
        let nested = dir.path().join("nested");
        fs::create_dir(&nested)?;
        File::create(nested.join("d.jpg"))?;

        let set = scan_image_folder(dir.path())?;
        let names: Vec<&str> = (0..set.len()).map(|i| set.file_name(i)).collect();
        assert_eq!(names, vec!["a.JPG", "b.jpeg", "c.png"]);
        Ok(())
    }

    #[test]
    fn scan_empty_folder_is_fatal_and_names_the_directory() -> Result<(), CatalogError> {
        let dir = tempdir()?;
        let err = scan_image_folder(dir.path()).unwrap_err();
        match err {
            CatalogError::EmptyImageSet(path) => assert_eq!(path, dir.path()),
            other => panic!("expected EmptyImageSet, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn scan_missing_path_reports_not_a_directory() {
        let err = scan_image_folder("definitely/not/here").unwrap_err();
        assert!(matches!(err, CatalogError::NotADirectory(_)));
    }

    #[test]
    fn path_and_file_name_agree() -> Result<(), CatalogError> {
        let dir = tempdir()?;
        File::create(dir.path().join("9.jpg"))?;

        let set = scan_image_folder(dir.path())?;
        assert_eq!(set.len(), 1);
        assert_eq!(set.file_name(0), "9.jpg");
        assert_eq!(set.path(0), dir.path().join("9.jpg"));
        Ok(())
    }
}
