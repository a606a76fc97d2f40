//! Parameter loading.
//!
//! A run is described by an optional JSON config file with command-line
//! flags layered on top.

use std::path::Path;

use anyhow::{Context, Result};
use cellcube_spec::AtlasParams;

/// Command-line values that override the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamOverrides {
    pub noise: Option<String>,
    pub file: Option<String>,
    pub grid_extent: Option<f64>,
    pub size: Option<u32>,
    pub box_size: Option<f64>,
    pub box_segs: Option<u32>,
    pub seed: Option<u32>,
    pub offset: Option<f64>,
    pub edge_color: Option<[f64; 3]>,
    pub timestamp: bool,
}

/// Parameters for a run after the config file and flags are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedParams {
    pub params: AtlasParams,
    /// Whether the config file or `--seed` chose the seed.
    pub seed_given: bool,
}

/// Read [`AtlasParams`] from a JSON file.
///
/// Also reports whether the file sets `seed`.
pub fn read_config(path: &Path) -> Result<(AtlasParams, bool)> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let params = AtlasParams::from_json(&json)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    let fields: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&json)?;
    Ok((params, fields.contains_key("seed")))
}

/// Build parameters from an optional config file plus overrides.
///
/// A noise type given on the command line replaces a file path from the
/// config and vice versa; everything else overrides field by field.
pub fn load_params(config: Option<&Path>, overrides: &ParamOverrides) -> Result<LoadedParams> {
    let (mut params, config_seed) = match config {
        Some(path) => read_config(path)?,
        None => (AtlasParams::default(), false),
    };
    apply_overrides(&mut params, overrides);
    Ok(LoadedParams {
        params,
        seed_given: config_seed || overrides.seed.is_some(),
    })
}

/// [`load_params`] taking the config path as given on the command line.
pub fn load_run_params(config: Option<&str>, overrides: &ParamOverrides) -> Result<LoadedParams> {
    load_params(config.map(Path::new), overrides)
}

/// Layer `overrides` onto `params`.
pub fn apply_overrides(params: &mut AtlasParams, overrides: &ParamOverrides) {
    if let Some(noise) = &overrides.noise {
        params.noise_type = Some(noise.clone());
        params.file_path = None;
    }
    if let Some(file) = &overrides.file {
        params.file_path = Some(file.clone());
        params.noise_type = None;
    }
    if let Some(grid_extent) = overrides.grid_extent {
        params.grid_extent = grid_extent;
    }
    if let Some(size) = overrides.size {
        params.size = size;
    }
    if let Some(box_size) = overrides.box_size {
        params.box_size = box_size;
    }
    if let Some(box_segs) = overrides.box_segs {
        params.box_segs = box_segs;
    }
    if let Some(seed) = overrides.seed {
        params.seed = seed;
    }
    if let Some(offset) = overrides.offset {
        params.offset = Some(offset);
    }
    if let Some(edge_color) = overrides.edge_color {
        params.edge_color = Some(edge_color);
    }
    if overrides.timestamp {
        params.timestamp = true;
    }
}

/// Parse an `r,g,b` triple with components in 0.0-1.0.
pub fn parse_rgb(value: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected r,g,b but got '{}'", value));
    }
    let mut rgb = [0.0; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        let v: f64 = part
            .parse()
            .map_err(|_| format!("'{}' is not a number", part))?;
        if !(0.0..=1.0).contains(&v) {
            return Err(format!("color component {} is outside 0.0-1.0", v));
        }
        *slot = v;
    }
    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let loaded = load_params(None, &ParamOverrides::default()).unwrap();
        assert_eq!(loaded.params, AtlasParams::default());
        assert!(!loaded.seed_given);
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.json");
        std::fs::write(
            &path,
            r#"{ "file_path": "old.png", "size": 64, "seed": 9, "grid_extent": 2.0 }"#,
        )
        .unwrap();

        let overrides = ParamOverrides {
            noise: Some("rounded".into()),
            size: Some(32),
            ..Default::default()
        };
        let loaded = load_params(Some(&path), &overrides).unwrap();
        assert!(loaded.seed_given);
        let params = loaded.params;
        assert_eq!(params.noise_type.as_deref(), Some("rounded"));
        assert_eq!(params.file_path, None);
        assert_eq!(params.size, 32);
        assert_eq!(params.seed, 9);
        assert_eq!(params.grid_extent, 2.0);
    }

    #[test]
    fn test_seed_given_tracks_config_and_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unseeded.json");
        std::fs::write(&path, r#"{ "noise_type": "base", "size": 8 }"#).unwrap();

        let loaded = load_params(Some(&path), &ParamOverrides::default()).unwrap();
        assert!(!loaded.seed_given);
        assert_eq!(loaded.params.seed, 0);

        let flagged = ParamOverrides {
            seed: Some(12),
            ..Default::default()
        };
        let loaded = load_params(Some(&path), &flagged).unwrap();
        assert!(loaded.seed_given);
        assert_eq!(loaded.params.seed, 12);

        let zero = dir.path().join("zero.json");
        std::fs::write(&zero, r#"{ "noise_type": "base", "seed": 0 }"#).unwrap();
        assert!(load_params(Some(&zero), &ParamOverrides::default()).unwrap().seed_given);
    }

    #[test]
    fn test_bad_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{ "colour": 1 }"#).unwrap();

        let err = load_params(Some(&path), &ParamOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("broken.json"));

        let missing = dir.path().join("missing.json");
        assert!(load_params(Some(&missing), &ParamOverrides::default()).is_err());
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("1, 0.5,0").unwrap(), [1.0, 0.5, 0.0]);
        assert!(parse_rgb("1,0").is_err());
        assert!(parse_rgb("1,0,x").is_err());
        assert!(parse_rgb("1,0,2").is_err());
    }
}
