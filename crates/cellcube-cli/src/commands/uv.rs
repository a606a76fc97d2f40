//! UV command implementation
//!
//! Prints the per-vertex UVs of a subdivided cube in mesh-builder order.

use std::process::ExitCode;

use anyhow::{Context, Result};
use cellcube_spec::CubeFace;
use cellcube_texture::uv::{face_uv_rect, map_uv, UvCoord};
use colored::Colorize;

use super::json_output::{error_codes, print_json, JsonError, UvFaceOutput, UvOutput};

/// Run the uv command
///
/// # Arguments
/// * `segs` - Quads per face edge
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(segs: u32, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(segs)
    } else {
        run_human(segs)
    }
}

/// Group a flat UV sequence by face.
pub fn uv_output(segs: u32, uvs: &[UvCoord]) -> UvOutput {
    let per_face = (uvs.len() / CubeFace::MESH_ORDER.len()).max(1);
    let faces = CubeFace::MESH_ORDER
        .iter()
        .zip(uvs.chunks(per_face))
        .map(|(&face, chunk)| UvFaceOutput {
            face,
            uvs: chunk.iter().map(|c| [c.u, c.v]).collect(),
        })
        .collect();
    UvOutput {
        segs,
        vertex_count: uvs.len(),
        faces,
    }
}

fn run_human(segs: u32) -> Result<ExitCode> {
    let uvs = map_uv(segs).with_context(|| format!("Failed to map UVs for segs={}", segs))?;
    let output = uv_output(segs, &uvs);

    println!(
        "{} {} vertices ({} per face)",
        "UV map:".cyan().bold(),
        output.vertex_count,
        output.vertex_count / CubeFace::MESH_ORDER.len()
    );
    for face in &output.faces {
        let rect = face_uv_rect(face.face);
        println!(
            "\n{} u [{:.3}, {:.3}] v [{:.3}, {:.3}]",
            face.face.as_str().bold(),
            rect.u_min,
            rect.u_max,
            rect.v_min,
            rect.v_max
        );
        for row in face.uvs.chunks(segs as usize + 1) {
            let line: Vec<String> = row
                .iter()
                .map(|[u, v]| format!("({:.4}, {:.4})", u, v))
                .collect();
            println!("  {}", line.join(" "));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(segs: u32) -> Result<ExitCode> {
    match map_uv(segs) {
        Ok(uvs) => {
            print_json(&uv_output(segs, &uvs))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_json(&JsonError::new(error_codes::UV, e.to_string()))?;
            Ok(ExitCode::from(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_output_groups_by_mesh_order() {
        let uvs = map_uv(1).unwrap();
        let output = uv_output(1, &uvs);
        assert_eq!(output.vertex_count, 24);
        assert_eq!(output.faces.len(), 6);
        assert_eq!(output.faces[0].face, CubeFace::Bottom);
        assert_eq!(output.faces[5].face, CubeFace::Right);
        assert!(output.faces.iter().all(|f| f.uvs.len() == 4));
    }

    #[test]
    fn test_zero_segments_fails() {
        assert!(run(0, false).is_err());
        assert_eq!(run(0, true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn test_oversized_segments_fail_without_allocating() {
        assert!(run(u32::MAX, false).is_err());
        assert_eq!(run(100_000, true).unwrap(), ExitCode::from(1));
    }
}
