//! Prediction lookup: filename → (occlusion, fog) pairs.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::CatalogError;
use crate::level::{FogLevel, OcclusionLevel};

/// Precomputed classification pair for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub occlusion: OcclusionLevel,
    /// Absent when the classifier produced no fog estimate for this frame.
    pub fog: Option<FogLevel>,
}

/// Source of per-image predictions, keyed by bare file name.
///
/// The static table is one implementation; a live inference backend can
/// stand in without touching navigation or rendering.
pub trait PredictionSource {
    /// `None` when the file has no entry. The viewer shows both indicators
    /// as unavailable in that case and keeps running.
    fn lookup(&self, file_name: &str) -> Option<Prediction>;
}

/// Immutable filename → prediction table, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct PredictionTable {
    entries: HashMap<String, Prediction>,
}

impl PredictionTable {
    /// Embedded classification results for the bundled sample set.
    pub fn builtin() -> Self {
        use FogLevel::*;
        use OcclusionLevel::*;
        let entries = [
            ("1.jpg", Blocked, None),
            ("2.jpg", PartiallyBlocked, Some(NoFog)),
            ("3.jpg", PartiallyBlocked, Some(NoFog)),
            ("4.jpg", Clear, Some(NoFog)),
            ("5.jpg", Blocked, None),
            ("6.jpg", Clear, Some(NoFog)),
            ("7.jpg", PartiallyBlocked, Some(NoFog)),
            ("8.jpg", Blocked, None),
            ("9.jpg", Clear, Some(DenseFog)),
            ("10.jpg", Blocked, None),
            ("11.jpg", PartiallyBlocked, Some(DenseFog)),
            ("12.jpg", Clear, Some(LightFog)),
            ("13.jpg", PartiallyBlocked, Some(NoFog)),
            ("14.jpg", Clear, Some(LightFog)),
            ("15.jpg", Blocked, None),
            ("16.jpg", PartiallyBlocked, Some(NoFog)),
            ("17.jpg", PartiallyBlocked, Some(NoFog)),
            ("18.jpg", PartiallyBlocked, Some(NoFog)),
            ("19.jpg", PartiallyBlocked, Some(NoFog)),
            ("20.jpg", PartiallyBlocked, Some(LightFog)),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(file, occlusion, fog)| (file.to_string(), Prediction { occlusion, fog }))
                .collect(),
        }
    }

    /// Load a table from a CSV with headers `file,occlusion,fog`; the fog
    /// field may be empty. Unknown label text is fatal.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let mut rdr = csv::Reader::from_path(path)?;
        Self::from_csv(&mut rdr)
    }

    pub fn from_csv_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let mut rdr = csv::Reader::from_reader(reader);
        Self::from_csv(&mut rdr)
    }

    fn from_csv<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Self, CatalogError> {
        let mut entries = HashMap::new();
        for record in rdr.deserialize() {
            let RawRecord {
                file,
                occlusion,
                fog,
            } = record?;
            let occlusion = OcclusionLevel::from_label(&occlusion)?;
            let fog = match fog.as_deref() {
                None | Some("") => None,
                Some(label) => Some(FogLevel::from_label(label)?),
            };
            entries.insert(file, Prediction { occlusion, fog });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PredictionSource for PredictionTable {
    fn lookup(&self, file_name: &str) -> Option<Prediction> {
        self.entries.get(file_name).copied()
    }
}

/// One CSV row before label validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    file: String,
    occlusion: String,
    fog: Option<String>,
}
