//! Cube face identities and their fixed orderings.

use serde::{Deserialize, Serialize};

/// One of the six faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeFace {
    Back,
    Forward,
    Left,
    Right,
    Bottom,
    Top,
}

impl CubeFace {
    /// Face order used to fill atlas cells; index `i` lands in
    /// row `i / 4`, column `i % 4`.
    pub const ATLAS_ORDER: [CubeFace; 6] = [
        CubeFace::Back,
        CubeFace::Forward,
        CubeFace::Left,
        CubeFace::Right,
        CubeFace::Bottom,
        CubeFace::Top,
    ];

    /// Face order in which the mesh builder emits vertices.
    pub const MESH_ORDER: [CubeFace; 6] = [
        CubeFace::Bottom,
        CubeFace::Top,
        CubeFace::Back,
        CubeFace::Forward,
        CubeFace::Left,
        CubeFace::Right,
    ];

    /// Returns the lowercase face name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CubeFace::Back => "back",
            CubeFace::Forward => "forward",
            CubeFace::Left => "left",
            CubeFace::Right => "right",
            CubeFace::Bottom => "bottom",
            CubeFace::Top => "top",
        }
    }

    /// Position of this face in [`CubeFace::ATLAS_ORDER`].
    pub fn atlas_index(&self) -> usize {
        match self {
            CubeFace::Back => 0,
            CubeFace::Forward => 1,
            CubeFace::Left => 2,
            CubeFace::Right => 3,
            CubeFace::Bottom => 4,
            CubeFace::Top => 5,
        }
    }

    /// Atlas cell `(row, col)` holding this face.
    pub fn atlas_cell(&self) -> (u32, u32) {
        let index = self.atlas_index() as u32;
        (index / 4, index % 4)
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post-sample transform applied to a face image before placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceTransform {
    /// Leave the image as sampled.
    Identity,
    /// Mirror columns (left-right).
    FlipHorizontal,
    /// Rotate by 180 degrees.
    Rotate180,
    /// Mirror columns, then rotate by 180 degrees.
    FlipRotate180,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atlas_cells_follow_row_major_layout() {
        assert_eq!(CubeFace::Back.atlas_cell(), (0, 0));
        assert_eq!(CubeFace::Right.atlas_cell(), (0, 3));
        assert_eq!(CubeFace::Bottom.atlas_cell(), (1, 0));
        assert_eq!(CubeFace::Top.atlas_cell(), (1, 1));

        for (i, face) in CubeFace::ATLAS_ORDER.iter().enumerate() {
            assert_eq!(face.atlas_index(), i);
        }
    }

    #[test]
    fn mesh_order_is_a_permutation() {
        let mut seen: Vec<usize> = CubeFace::MESH_ORDER
            .iter()
            .map(|f| f.atlas_index())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&CubeFace::Forward).unwrap();
        assert_eq!(json, "\"forward\"");
        let t: FaceTransform = serde_json::from_str("\"flip_rotate180\"").unwrap();
        assert_eq!(t, FaceTransform::FlipRotate180);
    }
}
