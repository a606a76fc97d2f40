//! cellcube Texture Backend
//!
//! This crate generates seamless cube textures from 3D cellular noise. Six
//! faces are sampled from planes of the cube `[0, extent]^3`, oriented so
//! shared edges line up, and packed into one 4x2 atlas. A matching UV
//! generator maps a subdivided cube mesh onto the atlas cells.
//!
//! All output is byte-identical given the same parameters.
//!
//! # Features
//!
//! - **Cellular kernel**: F1/F2 distances and nearest-cell color
//! - **Noise variants**: flat cells, hard edges, rounded edges, transparent edges
//! - **Face sampling**: per-face axis selection and seam-aligning transforms
//! - **Atlas packing**: fixed 4x2 layout with sampler and placement metadata
//! - **UV mapping**: per-vertex UVs in mesh-builder order, vertex buffer patching
//! - **Deterministic PNG**: fixed compression settings, BLAKE3 hashes
//!
//! # Example
//!
//! ```no_run
//! use cellcube_spec::{AtlasParams, NoiseType};
//! use cellcube_texture::generate::{generate_atlas, save_atlas};
//! use cellcube_texture::uv::map_uv;
//! use std::path::Path;
//!
//! let mut params = AtlasParams::procedural(NoiseType::Rounded);
//! params.size = 128;
//! params.seed = 42;
//!
//! let result = generate_atlas(&params).unwrap();
//! save_atlas(&result, Path::new("output"), "atlas").unwrap();
//!
//! let uvs = map_uv(params.box_segs).unwrap();
//! assert_eq!(uvs.len(), 6 * 36);
//! ```

pub mod atlas;
pub mod buffer;
pub mod color;
pub mod face;
pub mod generate;
pub mod noise;
pub mod png;
pub mod rng;
pub mod uv;

// Re-export main types for convenience
pub use atlas::{compose, AtlasImage};
pub use buffer::{PixelBuffer, PixelFormat};
pub use color::Color;
pub use face::{sample_face, FaceDescriptor, FaceImage, SamplingGrid};
pub use generate::{
    generate_atlas, load_atlas, resolve_atlas, save_atlas, AtlasResult, GenerateError, SavedAtlas,
};
pub use noise::{CellularNoise, FeatureSample, NoiseField, NoiseVariant, Point3};
pub use png::{PngConfig, PngError};
pub use rng::DeterministicRng;
pub use uv::{map_uv, write_uvs, UvCoord, UvError, VertexLayout};
