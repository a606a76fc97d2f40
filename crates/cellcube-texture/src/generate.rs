//! Main entry point for atlas generation.
//!
//! [`generate_atlas`] turns validated [`AtlasParams`] into an encoded atlas
//! plus its metadata; [`load_atlas`] does the same for an existing image.
//! Nothing touches the filesystem until [`save_atlas`] is called.

use std::path::{Path, PathBuf};
use std::time::Instant;

use cellcube_spec::validation::validate_params;
use cellcube_spec::{AtlasMetadata, AtlasParams, BackendError, CubeFace, NoiseType};
use chrono::NaiveDateTime;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, info_span};

use crate::atlas::{compose, AtlasImage};
use crate::color::Color;
use crate::face::{sample_face, FaceImage, SamplingGrid};
use crate::noise::{NoiseField, NoiseVariant};
use crate::png::{self, PngConfig, PngError};
use crate::rng::DeterministicRng;

/// Errors from atlas generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Atlas image is {width}x{height}; expected a 4:2 grid of square faces")]
    InvalidAtlasShape { width: u32, height: u32 },

    #[error("Metadata serialization error: {0}")]
    Metadata(#[from] serde_json::Error),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Png(_) => "ATLAS_001",
            GenerateError::Io(_) => "ATLAS_002",
            GenerateError::InvalidParameter(_) => "ATLAS_003",
            GenerateError::InvalidAtlasShape { .. } => "ATLAS_004",
            GenerateError::Metadata(_) => "ATLAS_005",
        }
    }

    fn category(&self) -> &'static str {
        "atlas"
    }
}

/// An atlas ready to be written or uploaded.
#[derive(Debug, Clone)]
pub struct AtlasResult {
    /// The atlas pixels.
    pub atlas: AtlasImage,
    /// PNG encoding of the atlas.
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of `png_data`.
    pub hash: String,
    /// Placement, sampler, and run metadata.
    pub metadata: AtlasMetadata,
}

/// Paths written by [`save_atlas`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAtlas {
    pub png_path: PathBuf,
    pub metadata_path: PathBuf,
}

/// Sample all six faces of `field`, in atlas order.
///
/// Faces are independent and are sampled in parallel.
pub fn generate_faces<F>(field: &F, grid: &SamplingGrid) -> Vec<FaceImage>
where
    F: NoiseField + ?Sized,
{
    CubeFace::ATLAS_ORDER
        .par_iter()
        .map(|&face| sample_face(face, field, grid))
        .collect()
}

/// Sample and compose the atlas for `field`.
pub fn generate_atlas_image<F>(field: &F, grid: &SamplingGrid) -> Result<AtlasImage, GenerateError>
where
    F: NoiseField + ?Sized,
{
    compose(&generate_faces(field, grid))
}

/// Offset used for a run: the explicit one, or one derived from the seed.
pub fn resolve_offset(params: &AtlasParams) -> f64 {
    params
        .offset
        .unwrap_or_else(|| DeterministicRng::derive_offset(params.seed))
}

/// Generate a procedural atlas from parameters.
///
/// Fails before any sampling if the parameters do not validate or describe
/// a file-backed atlas.
pub fn generate_atlas(params: &AtlasParams) -> Result<AtlasResult, GenerateError> {
    let noise_type = check_procedural(params)?;
    let offset = resolve_offset(params);
    let grid = SamplingGrid::new(params.size, params.grid_extent, offset)?;

    let _span = info_span!(
        "generate_atlas",
        noise = %noise_type,
        size = params.size,
        grid_extent = params.grid_extent,
        seed = params.seed,
        offset
    )
    .entered();

    let start = Instant::now();
    let variant = NoiseVariant::from_type(
        noise_type,
        params.seed,
        params.edge_color.map(Color::from_array),
    );
    let atlas = generate_atlas_image(&variant, &grid)?;
    let (png_data, hash) = png::write_png_to_vec_with_hash(&atlas.buffer, &PngConfig::default())?;

    let mut metadata = atlas.metadata();
    metadata.noise_type = Some(noise_type.as_str().to_string());
    metadata.seed = Some(params.seed);
    metadata.offset = Some(offset);
    metadata.grid_extent = Some(params.grid_extent);
    metadata.hash = Some(hash.clone());

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        hash = %hash,
        "generated atlas"
    );

    Ok(AtlasResult {
        atlas,
        png_data,
        hash,
        metadata,
    })
}

fn check_procedural(params: &AtlasParams) -> Result<NoiseType, GenerateError> {
    let validation = validate_params(params);
    if let Some(err) = validation.errors.first() {
        return Err(GenerateError::InvalidParameter(err.to_string()));
    }
    match params.parsed_noise_type() {
        Some(Ok(noise_type)) => Ok(noise_type),
        Some(Err(e)) => Err(GenerateError::InvalidParameter(e.to_string())),
        None => Err(GenerateError::InvalidParameter(
            "noise_type is required to generate an atlas".to_string(),
        )),
    }
}

/// Load an existing atlas image in place of generation.
pub fn load_atlas(path: &Path) -> Result<AtlasResult, GenerateError> {
    let png_data = std::fs::read(path)?;
    let buffer = png::read_png_from_reader(png_data.as_slice())?;
    let atlas = AtlasImage::from_buffer(buffer)?;
    let hash = png::hash_png(&png_data);

    let mut metadata = atlas.metadata();
    metadata.hash = Some(hash.clone());

    info!(
        path = %path.display(),
        width = atlas.width(),
        height = atlas.height(),
        "loaded atlas"
    );

    Ok(AtlasResult {
        atlas,
        png_data,
        hash,
        metadata,
    })
}

/// Produce the atlas described by `params`: loaded when `file_path` is
/// set, generated otherwise.
pub fn resolve_atlas(params: &AtlasParams) -> Result<AtlasResult, GenerateError> {
    match &params.file_path {
        Some(path) if params.noise_type.is_none() => load_atlas(Path::new(path)),
        _ => generate_atlas(params),
    }
}

/// File stem for an artifact, with a `_YYYYmmddHHMMSS` suffix when a
/// timestamp is given.
pub fn artifact_stem(stem: &str, timestamp: Option<NaiveDateTime>) -> String {
    match timestamp {
        Some(ts) => format!("{}_{}", stem, ts.format("%Y%m%d%H%M%S")),
        None => stem.to_string(),
    }
}

/// Write `<stem>.png` and `<stem>.json` into `out_dir`.
pub fn save_atlas(
    result: &AtlasResult,
    out_dir: &Path,
    stem: &str,
) -> Result<SavedAtlas, GenerateError> {
    std::fs::create_dir_all(out_dir)?;

    let png_path = out_dir.join(format!("{}.png", stem));
    std::fs::write(&png_path, &result.png_data)?;

    let metadata_path = out_dir.join(format!("{}.json", stem));
    let json = serde_json::to_string_pretty(&result.metadata)?;
    std::fs::write(&metadata_path, json)?;

    debug!(png = %png_path.display(), metadata = %metadata_path.display(), "saved atlas");

    Ok(SavedAtlas {
        png_path,
        metadata_path,
    })
}
