//! Generate command implementation
//!
//! Produces a cube atlas (generated or loaded) and writes it with its
//! metadata sidecar.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use cellcube_spec::{validate_params, AtlasParams, BackendError};
use cellcube_texture::generate::{artifact_stem, resolve_atlas, save_atlas};
use chrono::NaiveDateTime;
use colored::Colorize;

use super::json_output::{
    error_codes, print_json, validation_error_to_json, validation_warning_to_json, GenerateOutput,
    GenerateResult, JsonError,
};
use super::reporting;
use crate::input::{load_run_params, LoadedParams, ParamOverrides};

/// Default artifact stem.
pub const DEFAULT_STEM: &str = "atlas";

/// Run the generate command
///
/// # Arguments
/// * `config` - Optional JSON parameter file
/// * `overrides` - Parameter flags layered over the config
/// * `out_root` - Output directory (default: current directory)
/// * `stem` - Artifact file stem
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 invalid parameters, 2 generation error
pub fn run(
    config: Option<&str>,
    overrides: &ParamOverrides,
    out_root: Option<&str>,
    stem: &str,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(config, overrides, out_root, stem)
    } else {
        run_human(config, overrides, out_root, stem)
    }
}

/// Draw a random seed for procedural runs that did not pick one.
///
/// Returns whether a seed was drawn.
pub fn draw_seed_if_unset(loaded: &mut LoadedParams) -> bool {
    if loaded.seed_given || loaded.params.noise_type.is_none() {
        return false;
    }
    loaded.params.seed = rand::random();
    loaded.seed_given = true;
    true
}

fn timestamp(params: &AtlasParams) -> Option<NaiveDateTime> {
    params
        .timestamp
        .then(|| chrono::Local::now().naive_local())
}

fn run_human(
    config: Option<&str>,
    overrides: &ParamOverrides,
    out_root: Option<&str>,
    stem: &str,
) -> Result<ExitCode> {
    let start = Instant::now();
    let out_root = out_root.unwrap_or(".");

    if let Some(config) = config {
        println!("{} {}", "Config:".cyan().bold(), config);
    }
    let mut loaded = load_run_params(config, overrides)?;
    let drawn = draw_seed_if_unset(&mut loaded);
    let params = loaded.params;

    match (&params.noise_type, &params.file_path) {
        (Some(noise), _) => println!("{} {} noise", "Generating:".cyan().bold(), noise),
        (None, Some(file)) => println!("{} {}", "Loading:".cyan().bold(), file),
        (None, None) => {}
    }
    println!("{} {}", "Output root:".cyan().bold(), out_root);

    let validation = validate_params(&params);
    if !validation.is_ok() {
        reporting::print_validation_errors(&validation);
        println!(
            "\n{} Parameter validation failed with {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }
    reporting::print_validation_warnings(&validation);

    if params.noise_type.is_some() {
        let origin = if drawn { " (random)" } else { "" };
        println!("{} {}{}", "Seed:".dimmed(), params.seed, origin.dimmed());
    }

    let result = match resolve_atlas(&params) {
        Ok(result) => result,
        Err(e) => {
            println!("\n{} [{}] {}", "GENERATION FAILED".red().bold(), e.code(), e);
            return Ok(ExitCode::from(2));
        }
    };

    let stem = artifact_stem(stem, timestamp(&params));
    let saved = save_atlas(&result, Path::new(out_root), &stem)
        .with_context(|| format!("Failed to write atlas to {}", out_root))?;

    println!(
        "\n{} Wrote {}x{} atlas in {}ms",
        "SUCCESS".green().bold(),
        result.atlas.width(),
        result.atlas.height(),
        start.elapsed().as_millis()
    );
    println!("  {} {}", "Image:".dimmed(), saved.png_path.display());
    println!("  {} {}", "Metadata:".dimmed(), saved.metadata_path.display());
    println!("  {} {}", "Hash:".dimmed(), &result.hash[..16]);

    Ok(ExitCode::SUCCESS)
}

fn run_json(
    config: Option<&str>,
    overrides: &ParamOverrides,
    out_root: Option<&str>,
    stem: &str,
) -> Result<ExitCode> {
    let start = Instant::now();
    let out_root = out_root.unwrap_or(".");

    let mut loaded = match load_run_params(config, overrides) {
        Ok(loaded) => loaded,
        Err(e) => {
            let error = JsonError::new(error_codes::CONFIG, format!("{:#}", e));
            print_json(&GenerateOutput::failure(vec![error], vec![]))?;
            return Ok(ExitCode::from(1));
        }
    };
    draw_seed_if_unset(&mut loaded);
    let params = loaded.params;

    let validation = validate_params(&params);
    let warnings: Vec<_> = validation
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();
    if !validation.is_ok() {
        let errors = validation
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect();
        print_json(&GenerateOutput::failure(errors, warnings))?;
        return Ok(ExitCode::from(1));
    }

    let result = match resolve_atlas(&params) {
        Ok(result) => result,
        Err(e) => {
            let error = JsonError::new(e.code(), e.message());
            print_json(&GenerateOutput::failure(vec![error], warnings))?;
            return Ok(ExitCode::from(2));
        }
    };

    let stem = artifact_stem(stem, timestamp(&params));
    let saved = match save_atlas(&result, Path::new(out_root), &stem) {
        Ok(saved) => saved,
        Err(e) => {
            let error = JsonError::new(error_codes::WRITE, e.to_string());
            print_json(&GenerateOutput::failure(vec![error], warnings))?;
            return Ok(ExitCode::from(2));
        }
    };

    let output = GenerateOutput::success(
        GenerateResult {
            png_path: saved.png_path.display().to_string(),
            metadata_path: saved.metadata_path.display().to_string(),
            hash: result.hash,
            seed: params.seed,
            metadata: result.metadata,
            duration_ms: start.elapsed().as_millis() as u64,
        },
        warnings,
    );
    print_json(&output)?;

    Ok(ExitCode::SUCCESS)
}
