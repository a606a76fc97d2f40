//! Per-face sampling of a noise field.
//!
//! Each face is a square grid embedded in one plane of the cube
//! `[0, extent]^3`. Two axes vary across the image and the third is pinned
//! to 0 or `extent`. After sampling, a fixed transform is applied so that
//! neighboring faces meet with matching orientation in the atlas.

use std::time::Instant;

use cellcube_spec::validation::{validate_coordinate_range, validate_grid_extent, validate_size};
use cellcube_spec::{CubeFace, FaceTransform, ValidationResult};
use tracing::debug;

use crate::buffer::{PixelBuffer, PixelFormat};
use crate::generate::GenerateError;
use crate::noise::{NoiseField, Point3};

/// A coordinate axis of noise space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Where the fixed axis of a face is pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedAt {
    /// At 0.
    Origin,
    /// At the grid extent.
    Extent,
}

/// Static sampling data for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceDescriptor {
    pub face: CubeFace,
    /// Axis that varies down the image rows.
    pub row_axis: Axis,
    /// Axis that varies across the image columns.
    pub col_axis: Axis,
    /// Axis held constant.
    pub fixed_axis: Axis,
    pub fixed_at: FixedAt,
    /// Transform applied after sampling.
    pub transform: FaceTransform,
}

impl FaceDescriptor {
    /// The descriptor for `face`.
    pub const fn of(face: CubeFace) -> FaceDescriptor {
        use Axis::*;
        let (row_axis, col_axis, fixed_axis, fixed_at, transform) = match face {
            CubeFace::Back => (Z, X, Y, FixedAt::Origin, FaceTransform::Identity),
            CubeFace::Forward => (Z, X, Y, FixedAt::Extent, FaceTransform::FlipHorizontal),
            CubeFace::Left => (Z, Y, X, FixedAt::Origin, FaceTransform::FlipHorizontal),
            CubeFace::Right => (Z, Y, X, FixedAt::Extent, FaceTransform::Identity),
            CubeFace::Bottom => (Y, X, Z, FixedAt::Extent, FaceTransform::Identity),
            CubeFace::Top => (Y, X, Z, FixedAt::Origin, FaceTransform::FlipRotate180),
        };
        FaceDescriptor {
            face,
            row_axis,
            col_axis,
            fixed_axis,
            fixed_at,
            transform,
        }
    }

    /// Noise-space point for grid coordinates `(row, col)` before the offset.
    pub fn point(&self, row: f64, col: f64, extent: f64) -> Point3 {
        let fixed = match self.fixed_at {
            FixedAt::Origin => 0.0,
            FixedAt::Extent => extent,
        };
        let mut p = Point3::default();
        for (axis, value) in [
            (self.row_axis, row),
            (self.col_axis, col),
            (self.fixed_axis, fixed),
        ] {
            match axis {
                Axis::X => p.x = value,
                Axis::Y => p.y = value,
                Axis::Z => p.z = value,
            }
        }
        p
    }
}

/// Validated sampling grid shared by all faces of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingGrid {
    size: u32,
    extent: f64,
    offset: f64,
}

impl SamplingGrid {
    /// `size` pixels per edge spanning `[0, extent]`, shifted by `offset`.
    pub fn new(size: u32, extent: f64, offset: f64) -> Result<Self, GenerateError> {
        if !offset.is_finite() {
            return Err(GenerateError::InvalidParameter(format!(
                "offset must be finite, got {}",
                offset
            )));
        }
        let mut result = ValidationResult::default();
        validate_size(size, &mut result);
        validate_grid_extent(extent, &mut result);
        validate_coordinate_range(extent, offset, &mut result);
        if let Some(err) = result.errors.into_iter().next() {
            return Err(GenerateError::InvalidParameter(err.to_string()));
        }
        Ok(Self {
            size,
            extent,
            offset,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Evenly spaced coordinate `i` of `size` over `[0, extent]`, end points included.
    #[inline]
    pub fn coord(&self, i: u32) -> f64 {
        if self.size <= 1 {
            0.0
        } else {
            self.extent * i as f64 / (self.size - 1) as f64
        }
    }
}

/// The sampled image of one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceImage {
    pub face: CubeFace,
    pub buffer: PixelBuffer,
}

impl FaceImage {
    /// Pixels per edge.
    pub fn size(&self) -> u32 {
        self.buffer.width
    }
}

/// Apply a face transform in place.
pub fn apply_transform(buffer: &mut PixelBuffer, transform: FaceTransform) {
    match transform {
        FaceTransform::Identity => {}
        FaceTransform::FlipHorizontal => buffer.flip_horizontal(),
        FaceTransform::Rotate180 => buffer.rotate_180(),
        FaceTransform::FlipRotate180 => {
            buffer.flip_horizontal();
            buffer.rotate_180();
        }
    }
}

/// Sample `field` over a face without the post-sample transform.
pub fn sample_face_raw<F>(face: CubeFace, field: &F, grid: &SamplingGrid) -> FaceImage
where
    F: NoiseField + ?Sized,
{
    let descriptor = FaceDescriptor::of(face);
    let format = if field.has_alpha() {
        PixelFormat::Rgba8
    } else {
        PixelFormat::Rgb8
    };
    let size = grid.size();
    let mut buffer = PixelBuffer::new(size, size, format);

    for row in 0..size {
        let r = grid.coord(row);
        for col in 0..size {
            let p = descriptor
                .point(r, grid.coord(col), grid.extent())
                .offset(grid.offset());
            buffer.set_color(col, row, field.sample(p).to_color());
        }
    }

    FaceImage { face, buffer }
}

/// Sample `field` over a face and apply the face's transform.
pub fn sample_face<F>(face: CubeFace, field: &F, grid: &SamplingGrid) -> FaceImage
where
    F: NoiseField + ?Sized,
{
    let start = Instant::now();
    let mut image = sample_face_raw(face, field, grid);
    apply_transform(&mut image.buffer, FaceDescriptor::of(face).transform);
    debug!(
        face = %face,
        size = grid.size(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "sampled face"
    );
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::noise::FieldValue;

    /// Encodes the sample point into the color channels.
    struct CoordField;

    impl NoiseField for CoordField {
        fn sample(&self, p: Point3) -> FieldValue {
            FieldValue::Color(Color::rgb(p.x / 4.0, p.y / 4.0, p.z / 4.0))
        }
    }

    #[test]
    fn grid_coordinates_span_extent() {
        let grid = SamplingGrid::new(5, 4.0, 0.0).unwrap();
        let coords: Vec<f64> = (0..5).map(|i| grid.coord(i)).collect();
        assert_eq!(coords, vec![0.0, 1.0, 2.0, 3.0, 4.0]);

        let single = SamplingGrid::new(1, 4.0, 0.0).unwrap();
        assert_eq!(single.coord(0), 0.0);
    }

    #[test]
    fn grid_rejects_bad_input() {
        assert!(SamplingGrid::new(0, 4.0, 0.0).is_err());
        assert!(SamplingGrid::new(8, 0.0, 0.0).is_err());
        assert!(SamplingGrid::new(8, -2.0, 0.0).is_err());
        assert!(SamplingGrid::new(8, 4.0, f64::INFINITY).is_err());
    }

    #[test]
    fn grid_rejects_coordinates_past_the_lattice_range() {
        use cellcube_spec::MAX_COORDINATE;

        assert!(SamplingGrid::new(8, 4.0, MAX_COORDINATE - 4.0).is_ok());
        assert!(SamplingGrid::new(8, 4.0, MAX_COORDINATE - 3.0).is_err());
        assert!(SamplingGrid::new(8, 4.0, -3.0e9).is_err());
        assert!(SamplingGrid::new(8, 1.0e10, 0.0).is_err());
    }

    #[test]
    fn descriptors_pin_the_expected_axis() {
        let extent = 4.0;
        let bottom = FaceDescriptor::of(CubeFace::Bottom).point(1.0, 2.0, extent);
        assert_eq!(bottom, Point3::new(2.0, 1.0, 4.0));
        let top = FaceDescriptor::of(CubeFace::Top).point(1.0, 2.0, extent);
        assert_eq!(top, Point3::new(2.0, 1.0, 0.0));
        let back = FaceDescriptor::of(CubeFace::Back).point(1.0, 2.0, extent);
        assert_eq!(back, Point3::new(2.0, 0.0, 1.0));
        let forward = FaceDescriptor::of(CubeFace::Forward).point(1.0, 2.0, extent);
        assert_eq!(forward, Point3::new(2.0, 4.0, 1.0));
        let left = FaceDescriptor::of(CubeFace::Left).point(1.0, 2.0, extent);
        assert_eq!(left, Point3::new(0.0, 2.0, 1.0));
        let right = FaceDescriptor::of(CubeFace::Right).point(1.0, 2.0, extent);
        assert_eq!(right, Point3::new(4.0, 2.0, 1.0));
    }

    #[test]
    fn face_has_size_squared_pixels() {
        let grid = SamplingGrid::new(7, 4.0, 0.0).unwrap();
        for face in CubeFace::ATLAS_ORDER {
            let image = sample_face(face, &CoordField, &grid);
            assert_eq!(image.size(), 7);
            assert_eq!(image.buffer.pixel_count(), 49);
            assert_eq!(image.buffer.format, PixelFormat::Rgb8);
        }
    }

    #[test]
    fn top_face_is_vertical_flip_of_raw_sample() {
        let grid = SamplingGrid::new(5, 4.0, 0.0).unwrap();
        let raw = sample_face_raw(CubeFace::Top, &CoordField, &grid);
        // z is pinned at 0 on the top face.
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(raw.buffer.get(x, y)[2], 0);
            }
        }

        let mut expected = raw.buffer.clone();
        expected.flip_vertical();
        let transformed = sample_face(CubeFace::Top, &CoordField, &grid);
        assert_eq!(transformed.buffer, expected);
    }

    #[test]
    fn offset_shifts_every_coordinate() {
        let grid = SamplingGrid::new(2, 1.0, 1.0).unwrap();
        let raw = sample_face_raw(CubeFace::Back, &CoordField, &grid);
        // Pixel (0, 0) samples (1, 1, 1) -> 0.25 in every channel.
        assert_eq!(raw.buffer.get(0, 0), &[63, 63, 63]);
    }
}
