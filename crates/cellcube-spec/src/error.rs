//! Error types for parameter validation and processing.

/// Error codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Unknown noise type
    UnknownNoiseType,
    /// E002: Face size is zero
    InvalidSize,
    /// E003: Grid extent is not a positive finite number
    InvalidGridExtent,
    /// E004: Mesh subdivision count is zero
    InvalidSegments,
    /// E005: Neither or both of noise type and file path given
    AmbiguousSource,
    /// E006: Face size exceeds the allocation cap
    SizeTooLarge,
    /// E007: Offset is not finite
    InvalidOffset,
    /// E008: Offset plus grid extent leaves the noise lattice range
    CoordinateOutOfRange,
    /// E009: Mesh subdivision count exceeds the UV cap
    SegmentsTooLarge,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnknownNoiseType => "E001",
            ErrorCode::InvalidSize => "E002",
            ErrorCode::InvalidGridExtent => "E003",
            ErrorCode::InvalidSegments => "E004",
            ErrorCode::AmbiguousSource => "E005",
            ErrorCode::SizeTooLarge => "E006",
            ErrorCode::InvalidOffset => "E007",
            ErrorCode::CoordinateOutOfRange => "E008",
            ErrorCode::SegmentsTooLarge => "E009",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Box size is not positive (passed through to the mesh builder)
    NonPositiveBoxSize,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::NonPositiveBoxSize => "W001",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Name of the offending parameter (e.g., "grid_extent").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a field path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Name of the offending parameter.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a field path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Result of parameter validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so callers can report a
/// stable code and category regardless of the concrete error.
///
/// # Example
///
/// ```
/// use cellcube_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting, e.g. "ATLAS_001".
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_path() {
        let err = ValidationError::with_path(ErrorCode::InvalidSize, "size must be > 0", "size");
        assert_eq!(err.to_string(), "E002: size must be > 0 (at size)");

        let err = ValidationError::new(ErrorCode::AmbiguousSource, "pick one");
        assert_eq!(err.to_string(), "E005: pick one");
    }

    #[test]
    fn result_tracks_errors() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NonPositiveBoxSize,
            "box",
            "box_size",
        ));
        assert!(result.is_ok());
        result.add_error(ValidationError::new(ErrorCode::InvalidSegments, "zero"));
        assert!(!result.is_ok());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);
    }
}
