//! Atlas metadata written next to the atlas image.
//!
//! The sidecar tells a renderer where each face lives in the atlas and how
//! the texture must be sampled.

use serde::{Deserialize, Serialize};

use crate::face::{CubeFace, FaceTransform};

/// Texture coordinate wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    ClampToEdge,
    Repeat,
}

/// Texture filtering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Sampler configuration a renderer must use for the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerSettings {
    pub wrap_u: WrapMode,
    pub wrap_v: WrapMode,
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
}

impl SamplerSettings {
    /// Clamp on both axes with nearest filtering. Linear filtering would
    /// bleed neighboring faces across cell boundaries.
    pub const ATLAS: SamplerSettings = SamplerSettings {
        wrap_u: WrapMode::ClampToEdge,
        wrap_v: WrapMode::ClampToEdge,
        min_filter: FilterMode::Nearest,
        mag_filter: FilterMode::Nearest,
    };
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self::ATLAS
    }
}

/// UV rectangle in normalized [0, 1] coordinates, `v = 0` at the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    /// Left edge U coordinate.
    pub u_min: f64,
    /// Bottom edge V coordinate.
    pub v_min: f64,
    /// Right edge U coordinate.
    pub u_max: f64,
    /// Top edge V coordinate.
    pub v_max: f64,
}

impl UvRect {
    /// Whether two rectangles share interior area.
    pub fn overlaps(&self, other: &UvRect) -> bool {
        self.u_min < other.u_max
            && other.u_min < self.u_max
            && self.v_min < other.v_max
            && other.v_min < self.v_max
    }
}

/// Placement of one face in the atlas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceCellInfo {
    /// Face identity.
    pub face: CubeFace,
    /// Left pixel column of the cell.
    pub x: u32,
    /// Top pixel row of the cell.
    pub y: u32,
    /// Cell width in pixels.
    pub width: u32,
    /// Cell height in pixels.
    pub height: u32,
    /// UV rectangle covering the cell.
    pub uv: UvRect,
    /// Transform applied to the sampled face before placement.
    pub transform: FaceTransform,
}

/// Metadata for a composed atlas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasMetadata {
    /// Atlas width in pixels.
    pub atlas_width: u32,
    /// Atlas height in pixels.
    pub atlas_height: u32,
    /// Pixels per face edge.
    pub face_size: u32,
    /// Whether the image carries an alpha channel.
    pub has_alpha: bool,
    /// Noise type used, absent for loaded atlases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_type: Option<String>,
    /// Feature-point seed, absent for loaded atlases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Sample offset, absent for loaded atlases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Sampling grid extent, absent for loaded atlases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_extent: Option<f64>,
    /// BLAKE3 hash of the encoded PNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Required sampler configuration.
    pub sampler: SamplerSettings,
    /// One entry per face, in atlas order.
    pub faces: Vec<FaceCellInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_serializes_snake_case() {
        let json = serde_json::to_value(SamplerSettings::ATLAS).unwrap();
        assert_eq!(json["wrap_u"], "clamp_to_edge");
        assert_eq!(json["min_filter"], "nearest");
        assert_eq!(json["mag_filter"], "nearest");
    }

    #[test]
    fn adjacent_rects_do_not_overlap() {
        let a = UvRect {
            u_min: 0.0,
            v_min: 0.0,
            u_max: 0.25,
            v_max: 0.5,
        };
        let b = UvRect {
            u_min: 0.25,
            v_min: 0.0,
            u_max: 0.5,
            v_max: 0.5,
        };
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&a));
    }
}
