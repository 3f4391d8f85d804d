//! Label categories and their fixed severity orderings.
//!
//! Each category has exactly three members; `rank` is the 1-based position
//! in the severity ordering and drives both the indicator bar height and
//! the color lookup.

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// How much of the camera's view is physically obstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OcclusionLevel {
    Clear,
    PartiallyBlocked,
    Blocked,
}

impl OcclusionLevel {
    /// Members in severity order; rank 1 is the mildest.
    pub const ALL: [Self; 3] = [Self::Clear, Self::PartiallyBlocked, Self::Blocked];

    /// 1-based position in the severity ordering.
    pub fn rank(self) -> usize {
        match self {
            Self::Clear => 1,
            Self::PartiallyBlocked => 2,
            Self::Blocked => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartiallyBlocked => "Partially Blocked",
            Self::Blocked => "Blocked",
        }
    }

    pub fn from_label(value: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == value)
            .ok_or_else(|| CatalogError::InvalidLabel {
                category: "occlusion",
                value: value.to_string(),
            })
    }
}

/// Atmospheric fog density in front of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FogLevel {
    NoFog,
    LightFog,
    DenseFog,
}

impl FogLevel {
    /// Members in severity order; rank 1 is the mildest.
    pub const ALL: [Self; 3] = [Self::NoFog, Self::LightFog, Self::DenseFog];

    /// 1-based position in the severity ordering.
    pub fn rank(self) -> usize {
        match self {
            Self::NoFog => 1,
            Self::LightFog => 2,
            Self::DenseFog => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NoFog => "No Fog",
            Self::LightFog => "Light Fog",
            Self::DenseFog => "Dense Fog",
        }
    }

    pub fn from_label(value: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == value)
            .ok_or_else(|| CatalogError::InvalidLabel {
                category: "fog density",
                value: value.to_string(),
            })
    }
}
