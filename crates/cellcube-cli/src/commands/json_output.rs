//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`; in that mode stdout carries exactly one
//! of these documents and nothing else.

use cellcube_spec::{AtlasMetadata, AtlasParams, CubeFace, ValidationError, ValidationWarning};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Validation errors pass through with their own `E0xx` codes and backend
/// errors with their `ATLAS_0xx` codes.
pub mod error_codes {
    /// Config file could not be read or parsed
    pub const CONFIG: &str = "CLI_001";
    /// UV generation failed
    pub const UV: &str = "CLI_002";
    /// Artifact could not be written
    pub const WRITE: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "ATLAS_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Parameter name (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the parameter name for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warn.code.to_string(),
        message: warn.message.clone(),
        path: warn.path.clone(),
    }
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Written artifacts (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

/// Artifacts and run facts from a successful `generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    pub png_path: String,
    pub metadata_path: String,
    /// BLAKE3 hash of the PNG
    pub hash: String,
    /// Seed used, including one drawn at random
    pub seed: u32,
    pub metadata: AtlasMetadata,
    pub duration_ms: u64,
}

impl GenerateOutput {
    pub fn success(result: GenerateResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// The effective parameters after config and flags are merged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<AtlasParams>,
}

/// UVs of one face in a `uv` dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UvFaceOutput {
    pub face: CubeFace,
    pub uvs: Vec<[f64; 2]>,
}

/// JSON output for the `uv` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UvOutput {
    pub segs: u32,
    pub vertex_count: usize,
    pub faces: Vec<UvFaceOutput>,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AtlasMetadata>,
}

/// Serialize `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
