//! Atlas generation parameters.
//!
//! An [`AtlasParams`] value fully describes one run: either a procedural
//! atlas (`noise_type` set) or a pre-existing atlas image (`file_path`
//! set). The mesh fields are passed through to the mesh builder untouched
//! apart from `box_segs`, which also drives UV generation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The cellular noise flavour used to color the faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseType {
    /// Flat cell colors.
    Base,
    /// Cell colors with hard, linearly blended edges.
    Edges,
    /// Cell colors with smoothstep-rounded edges.
    Rounded,
    /// Solid edge color over a fully transparent cell interior.
    Transparent,
}

impl NoiseType {
    /// All noise types, in the order they are listed to users.
    pub const ALL: [NoiseType; 4] = [
        NoiseType::Base,
        NoiseType::Edges,
        NoiseType::Rounded,
        NoiseType::Transparent,
    ];

    /// Canonical name of this noise type.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseType::Base => "base",
            NoiseType::Edges => "edges",
            NoiseType::Rounded => "rounded",
            NoiseType::Transparent => "transparent",
        }
    }

    /// Canonical names of all noise types.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl std::fmt::Display for NoiseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a noise type name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown noise type '{value}': expected one of {}", NoiseType::names().join(", "))]
pub struct UnknownNoiseType {
    /// The rejected value.
    pub value: String,
}

impl FromStr for NoiseType {
    type Err = UnknownNoiseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" | "voronoi" => Ok(NoiseType::Base),
            "edges" | "edge" => Ok(NoiseType::Edges),
            "rounded" => Ok(NoiseType::Rounded),
            "transparent" => Ok(NoiseType::Transparent),
            _ => Err(UnknownNoiseType {
                value: s.to_string(),
            }),
        }
    }
}

/// Maximum face edge length in pixels.
pub const MAX_FACE_SIZE: u32 = 4096;

/// Maximum quads per face edge of the subdivided cube.
pub const MAX_SEGMENTS: u32 = 1024;

/// Largest `|offset| + grid_extent` accepted, 2^30.
///
/// Keeps every sample point's lattice cell, and its neighbors, well inside
/// the range of a 32-bit cell coordinate.
pub const MAX_COORDINATE: f64 = 1_073_741_824.0;

/// Parameters for one atlas run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtlasParams {
    /// Noise flavour to generate. Mutually exclusive with `file_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_type: Option<String>,
    /// Existing atlas image to load instead of generating one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Extent of the sampling grid along each axis (spatial frequency).
    #[serde(default = "default_grid_extent")]
    pub grid_extent: f64,
    /// Pixels per face edge.
    #[serde(default = "default_size")]
    pub size: u32,
    /// Cube edge length, passed through to the mesh builder.
    #[serde(default = "default_box_size")]
    pub box_size: f64,
    /// Quads per face edge of the subdivided cube.
    #[serde(default = "default_box_segs")]
    pub box_segs: u32,
    /// Seed for the cellular feature points.
    #[serde(default)]
    pub seed: u32,
    /// Offset added to every sample coordinate. Derived from `seed` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Edge color override as [r, g, b] in 0.0-1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_color: Option<[f64; 3]>,
    /// Append a `_YYYYmmddHHMMSS` suffix to the artifact name.
    #[serde(default)]
    pub timestamp: bool,
}

fn default_grid_extent() -> f64 {
    4.0
}

fn default_size() -> u32 {
    256
}

fn default_box_size() -> f64 {
    30.0
}

fn default_box_segs() -> u32 {
    5
}

impl Default for AtlasParams {
    fn default() -> Self {
        Self {
            noise_type: None,
            file_path: None,
            grid_extent: default_grid_extent(),
            size: default_size(),
            box_size: default_box_size(),
            box_segs: default_box_segs(),
            seed: 0,
            offset: None,
            edge_color: None,
            timestamp: false,
        }
    }
}

impl AtlasParams {
    /// Parameters for a procedural atlas of the given noise type.
    pub fn procedural(noise_type: NoiseType) -> Self {
        Self {
            noise_type: Some(noise_type.as_str().to_string()),
            ..Self::default()
        }
    }

    /// Parameters for loading an existing atlas image.
    pub fn from_file(path: impl Into<String>) -> Self {
        Self {
            file_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Parse parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize parameters to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Resolves the configured noise type, if any.
    pub fn parsed_noise_type(&self) -> Option<Result<NoiseType, UnknownNoiseType>> {
        self.noise_type.as_deref().map(str::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_canonical_names_and_aliases() {
        assert_eq!("base".parse::<NoiseType>().unwrap(), NoiseType::Base);
        assert_eq!("voronoi".parse::<NoiseType>().unwrap(), NoiseType::Base);
        assert_eq!("Edge".parse::<NoiseType>().unwrap(), NoiseType::Edges);
        assert_eq!("rounded".parse::<NoiseType>().unwrap(), NoiseType::Rounded);
        assert_eq!(
            "transparent".parse::<NoiseType>().unwrap(),
            NoiseType::Transparent
        );
    }

    #[test]
    fn unknown_noise_type_names_valid_options() {
        let err = "bogus".parse::<NoiseType>().unwrap_err();
        assert_eq!(err.value, "bogus");
        assert_eq!(
            err.to_string(),
            "unknown noise type 'bogus': expected one of base, edges, rounded, transparent"
        );
    }

    #[test]
    fn json_defaults_fill_missing_fields() {
        let params = AtlasParams::from_json(r#"{"noise_type": "rounded", "seed": 7}"#).unwrap();
        assert_eq!(params.noise_type.as_deref(), Some("rounded"));
        assert_eq!(params.seed, 7);
        assert_eq!(params.size, 256);
        assert_eq!(params.grid_extent, 4.0);
        assert_eq!(params.box_segs, 5);
        assert_eq!(params.offset, None);
    }

    #[test]
    fn json_rejects_unknown_fields() {
        assert!(AtlasParams::from_json(r#"{"noise": "base"}"#).is_err());
    }

    #[test]
    fn json_roundtrip_preserves_params() {
        let mut params = AtlasParams::procedural(NoiseType::Edges);
        params.offset = Some(12.5);
        params.edge_color = Some([1.0, 0.5, 0.0]);
        let json = params.to_json_pretty().unwrap();
        assert_eq!(AtlasParams::from_json(&json).unwrap(), params);
    }
}
