//! End-to-end integration tests.
//!
//! These tests write synthetic UDIM tile sequences, run the full pipeline,
//! and validate the composed atlases and the persisted layout.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};

use udim_atlas::config::{AtlasConfig, ResampleFilter};
use udim_atlas::{PackResult, Pipeline, remap_uv, udim_tile_id};

/// Write a solid-color tile as `<prefix>.<number>.png`.
fn write_tile(dir: &Path, prefix: &str, number: &str, size: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(size, size, Rgba(color))
        .save(dir.join(format!("{prefix}.{number}.png")))
        .unwrap();
}

/// Three-tile diffuse stack plus a parallel normal stack at double resolution.
fn write_two_stacks(dir: &Path) {
    write_tile(dir, "diffuse", "1001", 16, [255, 0, 0, 255]);
    write_tile(dir, "diffuse", "1002", 16, [0, 255, 0, 255]);
    write_tile(dir, "diffuse", "1011", 16, [0, 0, 255, 255]);

    write_tile(dir, "normal", "1001", 32, [128, 128, 255, 255]);
    write_tile(dir, "normal", "1002", 32, [128, 255, 128, 255]);
    write_tile(dir, "normal", "1011", 32, [255, 128, 128, 255]);
}

#[test]
fn full_pipeline_two_stacks() {
    let tmp = tempfile::tempdir().unwrap();
    let input_dir = tmp.path().join("input");
    let output_dir = tmp.path().join("output");
    fs::create_dir_all(&input_dir).unwrap();

    write_two_stacks(&input_dir);

    let config = AtlasConfig {
        inputs: vec![
            input_dir.join("diffuse.1001.png"),
            input_dir.join("normal.1001.png"),
        ],
        output: output_dir.clone(),
        filter: ResampleFilter::Nearest,
        ..Default::default()
    };

    let summary = Pipeline::run(&config).expect("pipeline should succeed");
    assert_eq!(summary.stack_count, 2);
    assert_eq!(summary.tile_count, 3);

    // Both atlases exist and share the layout's size.
    let diffuse = image::open(output_dir.join("diffuse_packed.png"))
        .unwrap()
        .to_rgba8();
    let normal = image::open(output_dir.join("normal_packed.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(
        diffuse.dimensions(),
        (summary.atlas_width, summary.atlas_height)
    );
    assert_eq!(diffuse.dimensions(), normal.dimensions());

    // layout.json round-trips and covers every tile.
    let json = fs::read_to_string(output_dir.join("layout.json")).unwrap();
    let layout: PackResult = serde_json::from_str(&json).unwrap();
    assert_eq!(layout.width, summary.atlas_width);
    assert_eq!(layout.height, summary.atlas_height);
    assert_eq!(layout.placements.len(), 3);

    // Each diffuse tile's solid color fills its placement; the normal stack
    // (resampled from 32px to the 16px placements) stays pixel-aligned.
    let expected_diffuse = [
        ("1001", Rgba([255u8, 0, 0, 255])),
        ("1002", Rgba([0, 255, 0, 255])),
        ("1011", Rgba([0, 0, 255, 255])),
    ];
    let expected_normal = [
        ("1001", Rgba([128u8, 128, 255, 255])),
        ("1002", Rgba([128, 255, 128, 255])),
        ("1011", Rgba([255, 128, 128, 255])),
    ];
    for ((identity, diffuse_color), (_, normal_color)) in
        expected_diffuse.iter().zip(expected_normal.iter())
    {
        let p = layout.placement(identity).unwrap();
        assert_eq!((p.width, p.height), (16, 16), "{identity}");
        assert_eq!(diffuse.get_pixel(p.x, p.y), diffuse_color, "{identity}");
        assert_eq!(
            diffuse.get_pixel(p.x + p.width - 1, p.y + p.height - 1),
            diffuse_color,
            "{identity}"
        );
        assert_eq!(normal.get_pixel(p.x, p.y), normal_color, "{identity}");
    }
}

#[test]
fn remap_through_persisted_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let input_dir = tmp.path().join("input");
    let output_dir = tmp.path().join("output");
    fs::create_dir_all(&input_dir).unwrap();

    write_two_stacks(&input_dir);

    let config = AtlasConfig {
        inputs: vec![input_dir.join("diffuse.1001.png")],
        output: output_dir.clone(),
        ..Default::default()
    };
    Pipeline::run(&config).unwrap();

    let json = fs::read_to_string(output_dir.join("layout.json")).unwrap();
    let layout: PackResult = serde_json::from_str(&json).unwrap();

    // A UV sample in tile 1002 (u in [1,2)) maps inside its placement.
    let uv = [1.5_f32, 0.5];
    let tile = udim_tile_id(uv);
    assert_eq!(tile, 1002);

    let [u, v] = remap_uv(&layout, uv, tile).unwrap();
    let p = layout.placement("1002").unwrap();
    let u_px = u * layout.width as f32;
    let v_px = v * layout.height as f32;
    assert!(u_px >= p.x as f32 && u_px <= (p.x + p.width) as f32);
    assert!(v_px >= p.y as f32 && v_px <= (p.y + p.height) as f32);

    // A tile absent from the layout is a hard error.
    assert!(remap_uv(&layout, [5.5, 5.5], udim_tile_id([5.5, 5.5])).is_err());
}

#[test]
fn mismatched_secondary_stack_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let input_dir = tmp.path().join("input");
    fs::create_dir_all(&input_dir).unwrap();

    write_tile(&input_dir, "diffuse", "1001", 8, [255, 0, 0, 255]);
    write_tile(&input_dir, "diffuse", "1002", 8, [0, 255, 0, 255]);
    // The normal stack lacks tile 1002.
    write_tile(&input_dir, "normal", "1001", 8, [128, 128, 255, 255]);

    let config = AtlasConfig {
        inputs: vec![
            input_dir.join("diffuse.1001.png"),
            input_dir.join("normal.1001.png"),
        ],
        output: tmp.path().join("output"),
        ..Default::default()
    };

    let err = Pipeline::run(&config).unwrap_err();
    assert!(
        err.to_string().contains("Stack mismatch"),
        "unexpected error: {err}"
    );
}

#[test]
fn missing_input_returns_error() {
    let tmp = tempfile::tempdir().unwrap();
    let config = AtlasConfig {
        inputs: vec![tmp.path().join("missing").join("diffuse.1001.png")],
        output: tmp.path().join("output"),
        ..Default::default()
    };

    assert!(Pipeline::run(&config).is_err());
}

#[test]
fn badly_named_input_returns_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("diffuse.png");
    RgbaImage::new(4, 4).save(&path).unwrap();

    let config = AtlasConfig {
        inputs: vec![path],
        output: tmp.path().join("output"),
        ..Default::default()
    };

    let err = Pipeline::run(&config).unwrap_err();
    assert!(err.to_string().contains("Invalid input"));
}
