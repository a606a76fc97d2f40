//! UV coordinates for a subdivided cube.
//!
//! The mesh builder emits `(segs + 1)^2` vertices per face, face by face
//! in [`CubeFace::MESH_ORDER`], each face row-major. [`map_uv`] yields one
//! `(u, v)` per vertex in that order, mapped into the face's atlas cell.
//! `v = 0` is the bottom row of the atlas image.

use cellcube_spec::{CubeFace, UvRect, MAX_SEGMENTS};
use thiserror::Error;

use crate::atlas::{ATLAS_COLUMNS, ATLAS_ROWS};

/// Errors from UV generation and vertex buffer patching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UvError {
    #[error("segment count must be at least 1")]
    ZeroSegments,

    #[error("segment count {segs} exceeds the maximum of {max}")]
    TooManySegments { segs: u32, max: u32 },

    #[error("vertex buffer holds {actual} floats, need at least {required}")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("uv offset {uv_offset} does not fit in a stride of {stride}")]
    InvalidLayout { stride: usize, uv_offset: usize },
}

/// A texture coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvCoord {
    pub u: f64,
    pub v: f64,
}

/// Which vertex index drives a UV component, counted back from the cell's far edge.
#[derive(Debug, Clone, Copy)]
enum Step {
    Col,
    ColFromEnd,
    Row,
    RowFromEnd,
}

impl Step {
    #[inline]
    fn steps(self, col: u32, row: u32, segs: u32) -> f64 {
        match self {
            Step::Col => col as f64,
            Step::ColFromEnd => (segs - col) as f64,
            Step::Row => row as f64,
            Step::RowFromEnd => (segs - row) as f64,
        }
    }
}

/// Per-face orientation of the UV grid; matches the face transforms used
/// when sampling.
fn face_steps(face: CubeFace) -> (Step, Step) {
    match face {
        CubeFace::Bottom => (Step::ColFromEnd, Step::Row),
        CubeFace::Top => (Step::ColFromEnd, Step::RowFromEnd),
        CubeFace::Back => (Step::RowFromEnd, Step::ColFromEnd),
        CubeFace::Forward => (Step::Row, Step::ColFromEnd),
        CubeFace::Left => (Step::Col, Step::RowFromEnd),
        CubeFace::Right => (Step::ColFromEnd, Step::RowFromEnd),
    }
}

/// UV rectangle of `face`'s atlas cell.
pub fn face_uv_rect(face: CubeFace) -> UvRect {
    let (row, col) = face.atlas_cell();
    let cell_u = 1.0 / ATLAS_COLUMNS as f64;
    let cell_v = 1.0 / ATLAS_ROWS as f64;
    let u_max = (col + 1) as f64 * cell_u;
    let v_max = 1.0 - row as f64 * cell_v;
    UvRect {
        u_min: u_max - cell_u,
        v_min: v_max - cell_v,
        u_max,
        v_max,
    }
}

/// Vertices per face for `segs` subdivisions, `None` on overflow.
#[inline]
pub fn vertices_per_face(segs: u32) -> Option<usize> {
    let n = usize::try_from(segs).ok()?.checked_add(1)?;
    n.checked_mul(n)
}

/// Iterator over the UVs of one face, in mesh-builder vertex order.
fn face_uvs(face: CubeFace, segs: u32) -> impl Iterator<Item = UvCoord> {
    let rect = face_uv_rect(face);
    let (u_step, v_step) = face_steps(face);
    let du = (rect.u_max - rect.u_min) / segs as f64;
    let dv = (rect.v_max - rect.v_min) / segs as f64;
    let n = segs + 1;

    (0..n * n).map(move |i| {
        let (col, row) = (i % n, i / n);
        UvCoord {
            u: rect.u_max - u_step.steps(col, row, segs) * du,
            v: rect.v_max - v_step.steps(col, row, segs) * dv,
        }
    })
}

/// UVs for every vertex of a cube with `segs x segs` quads per face.
///
/// Yields `6 * (segs + 1)^2` coordinates. The result depends only on
/// `segs`, which must be in `1..=MAX_SEGMENTS`.
pub fn map_uv(segs: u32) -> Result<Vec<UvCoord>, UvError> {
    if segs == 0 {
        return Err(UvError::ZeroSegments);
    }
    let too_many = UvError::TooManySegments {
        segs,
        max: MAX_SEGMENTS,
    };
    if segs > MAX_SEGMENTS {
        return Err(too_many);
    }
    let per_face = vertices_per_face(segs).ok_or(too_many)?;
    let mut out = Vec::with_capacity(6 * per_face);
    for face in CubeFace::MESH_ORDER {
        out.extend(face_uvs(face, segs));
    }
    Ok(out)
}

/// Position of the UV pair inside each vertex record of a flat `f32` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// Floats per vertex.
    pub stride: usize,
    /// Float index of `u` within a vertex; `v` follows it.
    pub uv_offset: usize,
}

impl Default for VertexLayout {
    /// Position (3), normal (3), color (4), uv (2).
    fn default() -> Self {
        Self {
            stride: 12,
            uv_offset: 10,
        }
    }
}

/// Write the cube UVs into `vertices` at each vertex's UV slot.
///
/// Returns the number of vertices written.
pub fn write_uvs(vertices: &mut [f32], layout: VertexLayout, segs: u32) -> Result<usize, UvError> {
    if layout.uv_offset + 2 > layout.stride {
        return Err(UvError::InvalidLayout {
            stride: layout.stride,
            uv_offset: layout.uv_offset,
        });
    }
    let uvs = map_uv(segs)?;
    let required = uvs.len().saturating_mul(layout.stride);
    if vertices.len() < required {
        return Err(UvError::BufferTooSmall {
            required,
            actual: vertices.len(),
        });
    }

    for (record, uv) in vertices.chunks_exact_mut(layout.stride).zip(&uvs) {
        record[layout.uv_offset] = uv.u as f32;
        record[layout.uv_offset + 1] = uv.v as f32;
    }
    Ok(uvs.len())
}
