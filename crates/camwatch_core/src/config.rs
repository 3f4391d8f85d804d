//! Startup configuration, read from an optional `camwatch.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory scanned for images at startup.
    pub image_dir: PathBuf,
    /// Optional CSV overriding the embedded prediction table.
    pub predictions_csv: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("test_images"),
            predictions_csv: None,
        }
    }
}

impl ViewerConfig {
    /// Read `path` if it exists; a missing file means defaults. A present
    /// but malformed file is fatal.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_means_defaults() -> Result<(), CatalogError> {
        let dir = tempdir()?;
        let config = ViewerConfig::load_or_default(dir.path().join("camwatch.toml"))?;
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.image_dir, PathBuf::from("test_images"));
        Ok(())
    }

    #[test]
    fn fields_override_defaults() -> Result<(), CatalogError> {
        let dir = tempdir()?;
        let path = dir.path().join("camwatch.toml");
        fs::write(
            &path,
            "image_dir = \"frames\"\npredictions_csv = \"labels.csv\"\n",
        )?;

        let config = ViewerConfig::load_or_default(&path)?;
        assert_eq!(config.image_dir, PathBuf::from("frames"));
        assert_eq!(config.predictions_csv, Some(PathBuf::from("labels.csv")));
        Ok(())
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() -> Result<(), CatalogError> {
        let dir = tempdir()?;
        let path = dir.path().join("camwatch.toml");
        fs::write(&path, "image_dir = \"frames\"\n")?;

        let config = ViewerConfig::load_or_default(&path)?;
        assert_eq!(config.image_dir, PathBuf::from("frames"));
        assert_eq!(config.predictions_csv, None);
        Ok(())
    }

    #[test]
    fn malformed_file_is_fatal() -> Result<(), CatalogError> {
        let dir = tempdir()?;
        let path = dir.path().join("camwatch.toml");
        fs::write(&path, "image_dir = [not toml")?;

        let err = ViewerConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
        Ok(())
    }
}
