//! Inspect command implementation
//!
//! Loads an existing atlas image and reports its layout.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cellcube_spec::BackendError;
use cellcube_texture::generate::load_atlas;
use colored::Colorize;

use super::json_output::{print_json, InspectOutput, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `file` - Path to an atlas PNG
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(file: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(file)
    } else {
        run_human(file)
    }
}

fn run_human(file: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), file);

    let result =
        load_atlas(Path::new(file)).with_context(|| format!("Failed to load atlas: {}", file))?;
    let metadata = &result.metadata;

    println!(
        "{} {}x{} ({} px faces, {})",
        "Atlas:".dimmed(),
        metadata.atlas_width,
        metadata.atlas_height,
        metadata.face_size,
        if metadata.has_alpha { "RGBA" } else { "RGB" }
    );
    println!("{} {}", "Hash:".dimmed(), result.hash);
    println!("\n{}", "Faces:".bold());
    for cell in &metadata.faces {
        println!(
            "  {:<8} px ({:>5}, {:>5})  uv [{:.2}-{:.2}] x [{:.2}-{:.2}]  {:?}",
            cell.face.as_str(),
            cell.x,
            cell.y,
            cell.uv.u_min,
            cell.uv.u_max,
            cell.uv.v_min,
            cell.uv.v_max,
            cell.transform
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(file: &str) -> Result<ExitCode> {
    let output = match load_atlas(Path::new(file)) {
        Ok(result) => InspectOutput {
            success: true,
            errors: Vec::new(),
            file: Some(file.to_string()),
            metadata: Some(result.metadata),
        },
        Err(e) => InspectOutput {
            success: false,
            errors: vec![JsonError::new(e.code(), e.message())],
            file: Some(file.to_string()),
            metadata: None,
        },
    };
    print_json(&output)?;

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellcube_spec::{AtlasParams, NoiseType};
    use cellcube_texture::generate::{generate_atlas, save_atlas};

    #[test]
    fn test_inspect_generated_atlas() {
        let dir = tempfile::tempdir().unwrap();
        let mut params = AtlasParams::procedural(NoiseType::Base);
        params.size = 4;
        let saved = save_atlas(&generate_atlas(&params).unwrap(), dir.path(), "a").unwrap();
        let path = saved.png_path.to_str().unwrap();

        assert_eq!(run(path, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(path, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        let path = path.to_str().unwrap();

        assert!(run(path, false).is_err());
        assert_eq!(run(path, true).unwrap(), ExitCode::from(1));
    }
}
