//! cellcube Parameter Library
//!
//! This crate provides the shared types for cellcube runs: the parameters
//! that describe a cube-face atlas, the cube face identities and their fixed
//! orderings, the metadata emitted alongside an atlas, and validation.
//!
//! # Example
//!
//! ```
//! use cellcube_spec::{AtlasParams, NoiseType};
//! use cellcube_spec::validation::validate_params;
//!
//! let mut params = AtlasParams::procedural(NoiseType::Edges);
//! params.size = 128;
//! params.seed = 42;
//!
//! let result = validate_params(&params);
//! assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`face`]: Cube face identities, atlas and mesh orderings
//! - [`metadata`]: Atlas sidecar metadata and sampler settings
//! - [`params`]: Run parameters and noise type selection
//! - [`validation`]: Parameter validation functions

pub mod error;
pub mod face;
pub mod metadata;
pub mod params;
pub mod validation;

pub use error::{
    BackendError, ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use face::{CubeFace, FaceTransform};
pub use metadata::{AtlasMetadata, FaceCellInfo, FilterMode, SamplerSettings, UvRect, WrapMode};
pub use params::{
    AtlasParams, NoiseType, UnknownNoiseType, MAX_COORDINATE, MAX_FACE_SIZE, MAX_SEGMENTS,
};
pub use validation::validate_params;
