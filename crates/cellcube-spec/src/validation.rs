//! Parameter validation.
//!
//! Every check runs before any buffer is allocated so a bad run fails
//! fast with all problems reported at once.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::params::{AtlasParams, MAX_COORDINATE, MAX_FACE_SIZE, MAX_SEGMENTS};

/// Validates atlas parameters.
///
/// # Example
/// ```
/// use cellcube_spec::{AtlasParams, NoiseType};
/// use cellcube_spec::validation::validate_params;
///
/// let params = AtlasParams::procedural(NoiseType::Rounded);
/// assert!(validate_params(&params).is_ok());
/// ```
pub fn validate_params(params: &AtlasParams) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_source(params, &mut result);
    validate_size(params.size, &mut result);
    validate_grid_extent(params.grid_extent, &mut result);
    validate_segments(params.box_segs, &mut result);

    if let Some(offset) = params.offset {
        if !offset.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidOffset,
                format!("offset must be finite, got {}", offset),
                "offset",
            ));
        }
    }
    // Offsets derived from the seed stay below 1000, far inside the range.
    validate_coordinate_range(params.grid_extent, params.offset.unwrap_or(0.0), &mut result);

    if params.box_size.is_nan() || params.box_size <= 0.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NonPositiveBoxSize,
            format!("box_size should be positive, got {}", params.box_size),
            "box_size",
        ));
    }

    result
}

fn validate_source(params: &AtlasParams, result: &mut ValidationResult) {
    match (&params.noise_type, &params.file_path) {
        (Some(_), Some(_)) => result.add_error(ValidationError::new(
            ErrorCode::AmbiguousSource,
            "noise_type and file_path are mutually exclusive",
        )),
        (None, None) => result.add_error(ValidationError::new(
            ErrorCode::AmbiguousSource,
            "one of noise_type or file_path is required",
        )),
        _ => {}
    }

    if let Some(Err(e)) = params.parsed_noise_type() {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnknownNoiseType,
            e.to_string(),
            "noise_type",
        ));
    }
}

/// Validates the face edge length in pixels.
pub fn validate_size(size: u32, result: &mut ValidationResult) {
    if size == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSize,
            "size must be at least 1 pixel",
            "size",
        ));
    } else if size > MAX_FACE_SIZE {
        result.add_error(ValidationError::with_path(
            ErrorCode::SizeTooLarge,
            format!("size must be at most {}, got {}", MAX_FACE_SIZE, size),
            "size",
        ));
    }
}

/// Validates the sampling grid extent.
pub fn validate_grid_extent(grid_extent: f64, result: &mut ValidationResult) {
    if !grid_extent.is_finite() || grid_extent <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidGridExtent,
            format!("grid_extent must be a positive number, got {}", grid_extent),
            "grid_extent",
        ));
    }
}

/// Validates that every sample coordinate stays within [`MAX_COORDINATE`].
///
/// Non-finite inputs are left to the extent and offset checks.
pub fn validate_coordinate_range(grid_extent: f64, offset: f64, result: &mut ValidationResult) {
    if !grid_extent.is_finite() || !offset.is_finite() {
        return;
    }
    let reach = offset.abs() + grid_extent.abs();
    if reach > MAX_COORDINATE {
        result.add_error(ValidationError::with_path(
            ErrorCode::CoordinateOutOfRange,
            format!(
                "|offset| + grid_extent must be at most {}, got {}",
                MAX_COORDINATE, reach
            ),
            "offset",
        ));
    }
}

/// Validates the mesh subdivision count.
pub fn validate_segments(segs: u32, result: &mut ValidationResult) {
    if segs == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSegments,
            "box_segs must be at least 1",
            "box_segs",
        ));
    } else if segs > MAX_SEGMENTS {
        result.add_error(ValidationError::with_path(
            ErrorCode::SegmentsTooLarge,
            format!("box_segs must be at most {}, got {}", MAX_SEGMENTS, segs),
            "box_segs",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::NoiseType;
    use pretty_assertions::assert_eq;

    fn codes(result: &ValidationResult) -> Vec<ErrorCode> {
        result.errors.iter().map(|e| e.code).collect()
    }

    #[test]
    fn defaults_are_valid() {
        for noise in NoiseType::ALL {
            let result = validate_params(&AtlasParams::procedural(noise));
            assert!(result.is_ok(), "{:?}", result.errors);
            assert!(result.warnings.is_empty());
        }
        assert!(validate_params(&AtlasParams::from_file("atlas.png")).is_ok());
    }

    #[test]
    fn unknown_noise_type_is_rejected() {
        let mut params = AtlasParams::default();
        params.noise_type = Some("bogus".to_string());
        let result = validate_params(&params);
        assert_eq!(codes(&result), vec![ErrorCode::UnknownNoiseType]);
        let message = &result.errors[0].message;
        for name in ["base", "edges", "rounded", "transparent"] {
            assert!(message.contains(name), "{message}");
        }
    }

    #[test]
    fn source_must_be_exactly_one() {
        let result = validate_params(&AtlasParams::default());
        assert_eq!(codes(&result), vec![ErrorCode::AmbiguousSource]);

        let mut params = AtlasParams::procedural(NoiseType::Base);
        params.file_path = Some("a.png".into());
        let result = validate_params(&params);
        assert_eq!(codes(&result), vec![ErrorCode::AmbiguousSource]);
    }

    #[test]
    fn numeric_fields_are_checked_together() {
        let mut params = AtlasParams::procedural(NoiseType::Edges);
        params.size = 0;
        params.grid_extent = -1.0;
        params.box_segs = 0;
        params.offset = Some(f64::NAN);
        let result = validate_params(&params);
        assert_eq!(
            codes(&result),
            vec![
                ErrorCode::InvalidSize,
                ErrorCode::InvalidGridExtent,
                ErrorCode::InvalidSegments,
                ErrorCode::InvalidOffset,
            ]
        );
    }

    #[test]
    fn oversized_faces_and_nan_extent_are_rejected() {
        let mut params = AtlasParams::procedural(NoiseType::Base);
        params.size = MAX_FACE_SIZE + 1;
        params.grid_extent = f64::NAN;
        let result = validate_params(&params);
        assert_eq!(
            codes(&result),
            vec![ErrorCode::SizeTooLarge, ErrorCode::InvalidGridExtent]
        );
    }

    #[test]
    fn far_offsets_are_rejected() {
        let mut params = AtlasParams::procedural(NoiseType::Base);
        params.offset = Some(3.0e9);
        let result = validate_params(&params);
        assert_eq!(codes(&result), vec![ErrorCode::CoordinateOutOfRange]);
        assert_eq!(result.errors[0].path.as_deref(), Some("offset"));

        params.offset = Some(-3.0e9);
        assert_eq!(
            codes(&validate_params(&params)),
            vec![ErrorCode::CoordinateOutOfRange]
        );

        params.grid_extent = 1.0;
        params.offset = Some(MAX_COORDINATE - 1.0);
        assert!(validate_params(&params).is_ok());
        params.offset = Some(MAX_COORDINATE);
        assert_eq!(
            codes(&validate_params(&params)),
            vec![ErrorCode::CoordinateOutOfRange]
        );
    }

    #[test]
    fn huge_grid_extent_is_rejected() {
        let mut params = AtlasParams::procedural(NoiseType::Edges);
        params.grid_extent = 1.0e12;
        assert_eq!(
            codes(&validate_params(&params)),
            vec![ErrorCode::CoordinateOutOfRange]
        );
    }

    #[test]
    fn segment_count_is_capped() {
        let mut params = AtlasParams::procedural(NoiseType::Base);
        params.box_segs = MAX_SEGMENTS;
        assert!(validate_params(&params).is_ok());

        params.box_segs = MAX_SEGMENTS + 1;
        assert_eq!(
            codes(&validate_params(&params)),
            vec![ErrorCode::SegmentsTooLarge]
        );
        params.box_segs = u32::MAX;
        assert_eq!(
            codes(&validate_params(&params)),
            vec![ErrorCode::SegmentsTooLarge]
        );
    }

    #[test]
    fn non_positive_box_size_only_warns() {
        let mut params = AtlasParams::procedural(NoiseType::Base);
        params.box_size = 0.0;
        let result = validate_params(&params);
        assert!(result.is_ok());
        assert_eq!(result.warnings[0].code, WarningCode::NonPositiveBoxSize);
    }
}
