//! Atlas composition.
//!
//! The atlas is a 4x2 grid of face-sized cells. Faces fill the cells in
//! [`CubeFace::ATLAS_ORDER`], row-major from the top-left; the last two
//! cells of the bottom row stay at the background value (zero).

use cellcube_spec::{AtlasMetadata, CubeFace, FaceCellInfo, SamplerSettings};
use tracing::info;

use crate::buffer::PixelBuffer;
use crate::face::{FaceDescriptor, FaceImage};
use crate::generate::GenerateError;
use crate::uv::face_uv_rect;

/// Atlas columns.
pub const ATLAS_COLUMNS: u32 = 4;
/// Atlas rows.
pub const ATLAS_ROWS: u32 = 2;

/// A composed cube atlas, `4 * face_size` wide and `2 * face_size` tall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasImage {
    /// Pixels per face edge.
    pub face_size: u32,
    /// The atlas pixels, top row first.
    pub buffer: PixelBuffer,
}

impl AtlasImage {
    /// Wrap a buffer whose shape is `4s x 2s` for some `s > 0`.
    pub fn from_buffer(buffer: PixelBuffer) -> Result<Self, GenerateError> {
        let face_size = buffer.width / ATLAS_COLUMNS;
        if face_size == 0
            || buffer.width != face_size * ATLAS_COLUMNS
            || buffer.height != face_size * ATLAS_ROWS
        {
            return Err(GenerateError::InvalidAtlasShape {
                width: buffer.width,
                height: buffer.height,
            });
        }
        Ok(Self { face_size, buffer })
    }

    pub fn width(&self) -> u32 {
        self.buffer.width
    }

    pub fn height(&self) -> u32 {
        self.buffer.height
    }

    /// Copy out the cell holding `face`.
    pub fn face_region(&self, face: CubeFace) -> PixelBuffer {
        let (x, y) = cell_origin(face, self.face_size);
        self.buffer.region(x, y, self.face_size, self.face_size)
    }

    /// Bytes in bottom-up row order for direct texture upload.
    pub fn to_bottom_up_bytes(&self) -> Vec<u8> {
        self.buffer.to_bottom_up_bytes()
    }

    /// Cell placement and sampler metadata for this atlas.
    pub fn metadata(&self) -> AtlasMetadata {
        let faces = CubeFace::ATLAS_ORDER
            .iter()
            .map(|&face| {
                let (x, y) = cell_origin(face, self.face_size);
                FaceCellInfo {
                    face,
                    x,
                    y,
                    width: self.face_size,
                    height: self.face_size,
                    uv: face_uv_rect(face),
                    transform: FaceDescriptor::of(face).transform,
                }
            })
            .collect();

        AtlasMetadata {
            atlas_width: self.width(),
            atlas_height: self.height(),
            face_size: self.face_size,
            has_alpha: self.buffer.format.channels() == 4,
            noise_type: None,
            seed: None,
            offset: None,
            grid_extent: None,
            hash: None,
            sampler: SamplerSettings::ATLAS,
            faces,
        }
    }
}

/// Pixel position of the top-left corner of `face`'s cell.
pub fn cell_origin(face: CubeFace, face_size: u32) -> (u32, u32) {
    let (row, col) = face.atlas_cell();
    (col * face_size, row * face_size)
}

/// Place six face images into a new atlas.
///
/// Faces must arrive in [`CubeFace::ATLAS_ORDER`] and share one size and
/// pixel format.
pub fn compose(faces: &[FaceImage]) -> Result<AtlasImage, GenerateError> {
    if faces.len() != CubeFace::ATLAS_ORDER.len() {
        return Err(GenerateError::InvalidParameter(format!(
            "expected {} face images, got {}",
            CubeFace::ATLAS_ORDER.len(),
            faces.len()
        )));
    }

    let size = faces[0].size();
    let format = faces[0].buffer.format;

    for (image, expected) in faces.iter().zip(CubeFace::ATLAS_ORDER) {
        if image.face != expected {
            return Err(GenerateError::InvalidParameter(format!(
                "face '{}' found where '{}' was expected",
                image.face, expected
            )));
        }
        if image.buffer.width != size || image.buffer.height != size {
            return Err(GenerateError::InvalidParameter(format!(
                "face '{}' is {}x{}, expected {}x{}",
                image.face, image.buffer.width, image.buffer.height, size, size
            )));
        }
        if image.buffer.format != format {
            return Err(GenerateError::InvalidParameter(format!(
                "face '{}' has pixel format {:?}, expected {:?}",
                image.face, image.buffer.format, format
            )));
        }
    }

    let mut canvas = PixelBuffer::new(size * ATLAS_COLUMNS, size * ATLAS_ROWS, format);
    for image in faces {
        let (x, y) = cell_origin(image.face, size);
        canvas.blit(&image.buffer, x, y);
    }

    info!(
        width = canvas.width,
        height = canvas.height,
        "composed atlas"
    );

    Ok(AtlasImage {
        face_size: size,
        buffer: canvas,
    })
}
