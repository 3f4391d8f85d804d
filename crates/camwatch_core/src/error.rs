use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling the viewing catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The scanned directory contained no displayable images.
    #[error("no images found in {0}")]
    EmptyImageSet(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A label string outside the recognized category members.
    #[error("unrecognized {category} label: {value:?}")]
    InvalidLabel {
        category: &'static str,
        value: String,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prediction table: {0}")]
    Csv(#[from] csv::Error),

    #[error("config: {0}")]
    Config(#[from] toml::de::Error),
}
