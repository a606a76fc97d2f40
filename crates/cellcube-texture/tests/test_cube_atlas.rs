//! End-to-end tests for cube atlas generation: layout, seams, persistence.

use cellcube_spec::{AtlasMetadata, AtlasParams, CubeFace, NoiseType};
use cellcube_texture::face::{sample_face, sample_face_raw, SamplingGrid};
use cellcube_texture::generate::{
    artifact_stem, generate_atlas, load_atlas, resolve_atlas, save_atlas,
};
use cellcube_texture::noise::NoiseVariant;
use cellcube_texture::uv::{face_uv_rect, map_uv};
use cellcube_texture::{AtlasImage, GenerateError, PixelFormat};

fn params(noise: NoiseType, size: u32) -> AtlasParams {
    let mut params = AtlasParams::procedural(noise);
    params.size = size;
    params.seed = 1234;
    params.offset = Some(17.0);
    params
}

// ============================================================================
// Layout
// ============================================================================

/// Atlas dimensions are always (4 * size, 2 * size).
#[test]
fn test_atlas_dimensions_for_several_sizes() {
    for size in [1, 3, 16, 33] {
        let result = generate_atlas(&params(NoiseType::Edges, size)).unwrap();
        assert_eq!(result.atlas.width(), 4 * size);
        assert_eq!(result.atlas.height(), 2 * size);
        assert_eq!(result.atlas.face_size, size);
    }
}

/// The top face, before its transform, is the z = 0 plane; after, it is
/// that image flipped top to bottom.
#[test]
fn test_top_face_scenario() {
    let variant = NoiseVariant::from_type(NoiseType::Base, 0, None);
    let grid = SamplingGrid::new(256, 4.0, 0.0).unwrap();

    let raw = sample_face_raw(CubeFace::Top, &variant, &grid);
    // Bottom samples z = extent, so the two planes differ.
    let bottom = sample_face_raw(CubeFace::Bottom, &variant, &grid);
    assert_ne!(bottom.buffer, raw.buffer);

    let mut expected = raw.buffer.clone();
    expected.flip_vertical();
    let top = sample_face(CubeFace::Top, &variant, &grid);
    assert_eq!(top.buffer, expected);
    assert_eq!(top.buffer.pixel_count(), 256 * 256);
}

/// Unused cells of an RGBA atlas stay fully transparent.
#[test]
fn test_transparent_background_cells() {
    let result = generate_atlas(&params(NoiseType::Transparent, 4)).unwrap();
    let atlas = &result.atlas;
    assert_eq!(atlas.buffer.format, PixelFormat::Rgba8);
    for y in 4..8 {
        for x in 8..16 {
            assert_eq!(atlas.buffer.get(x, y), &[0, 0, 0, 0]);
        }
    }
}

// ============================================================================
// Seams
// ============================================================================

/// Faces that meet on a cube edge sample identical points along it.
#[test]
fn test_shared_edges_match() {
    let size = 12;
    let variant = NoiseVariant::from_type(NoiseType::Rounded, 5, None);
    let grid = SamplingGrid::new(size, 3.0, 2.5).unwrap();
    let last = size - 1;

    let back = sample_face_raw(CubeFace::Back, &variant, &grid).buffer;
    let bottom = sample_face_raw(CubeFace::Bottom, &variant, &grid).buffer;
    let right = sample_face_raw(CubeFace::Right, &variant, &grid).buffer;
    let left = sample_face_raw(CubeFace::Left, &variant, &grid).buffer;

    for i in 0..size {
        // y = 0, z = extent: back's last row, bottom's first row.
        assert_eq!(back.get(i, last), bottom.get(i, 0));
        // x = extent, z = extent: right's last row, bottom's last column.
        assert_eq!(right.get(i, last), bottom.get(last, i));
        // x = 0, y = 0: left's first column, back's first column.
        assert_eq!(left.get(0, i), back.get(0, i));
    }
}

// ============================================================================
// UV agreement
// ============================================================================

/// Every UV rectangle covers the atlas cell that holds its face.
#[test]
fn test_uv_rects_match_atlas_cells() {
    let result = generate_atlas(&params(NoiseType::Base, 8)).unwrap();
    let metadata = &result.metadata;
    for cell in &metadata.faces {
        let rect = face_uv_rect(cell.face);
        assert_eq!(rect, cell.uv);
        let u_min = cell.x as f64 / metadata.atlas_width as f64;
        let u_max = (cell.x + cell.width) as f64 / metadata.atlas_width as f64;
        // v runs bottom-up while pixel rows run top-down.
        let v_max = 1.0 - cell.y as f64 / metadata.atlas_height as f64;
        let v_min = 1.0 - (cell.y + cell.height) as f64 / metadata.atlas_height as f64;
        assert_eq!((rect.u_min, rect.u_max), (u_min, u_max), "{}", cell.face);
        assert_eq!((rect.v_min, rect.v_max), (v_min, v_max), "{}", cell.face);
    }

    let uvs = map_uv(3).unwrap();
    assert!(uvs
        .iter()
        .all(|c| (0.0..=1.0).contains(&c.u) && (0.0..=1.0).contains(&c.v)));
}

// ============================================================================
// Persistence
// ============================================================================

/// Saving then loading restores the same pixels, hash, and placements.
#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate_atlas(&params(NoiseType::Transparent, 6)).unwrap();
    let saved = save_atlas(&result, dir.path(), "atlas").unwrap();

    assert!(saved.png_path.ends_with("atlas.png"));
    let json = std::fs::read_to_string(&saved.metadata_path).unwrap();
    let metadata: AtlasMetadata = serde_json::from_str(&json).unwrap();
    assert_eq!(metadata, result.metadata);

    let loaded = load_atlas(&saved.png_path).unwrap();
    assert_eq!(loaded.atlas, result.atlas);
    assert_eq!(loaded.hash, result.hash);
    assert_eq!(loaded.metadata.faces, result.metadata.faces);
    assert_eq!(loaded.metadata.noise_type, None);

    let via_params = resolve_atlas(&AtlasParams::from_file(
        saved.png_path.to_string_lossy().to_string(),
    ))
    .unwrap();
    assert_eq!(via_params.atlas, result.atlas);
}

/// Images that are not a 4:2 grid are refused on load.
#[test]
fn test_load_rejects_wrong_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.png");
    let buffer = cellcube_texture::PixelBuffer::new(8, 8, PixelFormat::Rgb8);
    let (data, _) =
        cellcube_texture::png::write_png_to_vec_with_hash(&buffer, &Default::default()).unwrap();
    std::fs::write(&path, data).unwrap();

    assert!(matches!(
        load_atlas(&path),
        Err(GenerateError::InvalidAtlasShape {
            width: 8,
            height: 8
        })
    ));
    assert!(AtlasImage::from_buffer(buffer).is_err());
}

/// Missing files surface as I/O errors.
#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_atlas(&dir.path().join("nope.png")),
        Err(GenerateError::Io(_))
    ));
}

#[test]
fn test_artifact_stem_without_timestamp() {
    assert_eq!(artifact_stem("cube", None), "cube");
}
