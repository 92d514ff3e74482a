//! Validates file round-trips and the full CLI-driven pipeline

use image::{Rgb, RgbImage};
use mazetint::MazeError;
use mazetint::io::cli::{Cli, FileProcessor};
use mazetint::io::image::{derived_grid_size, export_maze_image, load_source_image};

fn gradient_image(width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([(x * 9 % 256) as u8, (y * 13 % 256) as u8, 77]);
    }
    img
}

fn quiet_cli(target: std::path::PathBuf) -> Cli {
    Cli {
        target,
        seed: 42,
        cell_size: 5,
        wall_thickness: 1,
        start_x: None,
        start_y: None,
        quiet: true,
        no_skip: false,
    }
}

#[test]
fn test_load_derive_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gradient.png");
    gradient_image(23, 17).save(&input).unwrap();

    let loaded = load_source_image(&input).unwrap();
    assert_eq!((loaded.width(), loaded.height()), (23, 17));

    // 23x17 pixels at cell size 5 spans 4x3 cells; remainder pixels drop
    assert_eq!(derived_grid_size(&loaded, 5).unwrap(), (4, 3));

    let output = dir.path().join("nested").join("out.png");
    export_maze_image(&loaded, &output).unwrap();
    let reread = image::open(&output).unwrap().to_rgb8();
    assert_eq!(reread, loaded);
}

#[test]
fn test_missing_input_reports_load_stage() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_source_image(&dir.path().join("absent.png")).unwrap_err();
    assert!(matches!(err, MazeError::ImageLoad { .. }));
}

#[test]
fn test_undersized_image_reports_degenerate_grid() {
    let small = RgbImage::new(4, 9);
    let err = derived_grid_size(&small, 5).unwrap_err();
    match err {
        MazeError::DegenerateGrid {
            image_dimensions,
            cell_size,
        } => {
            assert_eq!(image_dimensions, (4, 9));
            assert_eq!(cell_size, 5);
        }
        other => panic!("expected DegenerateGrid, got {other}"),
    }
}

#[test]
fn test_zero_cell_size_rejected() {
    let img = RgbImage::new(10, 10);
    let err = derived_grid_size(&img, 0).unwrap_err();
    assert!(matches!(err, MazeError::InvalidParameter { .. }));
}

#[test]
fn test_processor_writes_suffixed_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scene.png");
    gradient_image(30, 20).save(&input).unwrap();

    FileProcessor::new(quiet_cli(input)).process().unwrap();

    let output = dir.path().join("scene_maze.png");
    let canvas = image::open(&output).unwrap().to_rgb8();

    // 30x20 source at cell size 5 spans 6x4 cells
    assert_eq!((canvas.width(), canvas.height()), (6 * 5 + 1, 4 * 5 + 1));
}

#[test]
fn test_processor_skips_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scene.png");
    gradient_image(30, 20).save(&input).unwrap();

    FileProcessor::new(quiet_cli(input.clone())).process().unwrap();
    let output = dir.path().join("scene_maze.png");
    let first_written = std::fs::read(&output).unwrap();

    // Second run finds the output and leaves it alone
    std::fs::write(&output, b"sentinel").unwrap();
    FileProcessor::new(quiet_cli(input.clone())).process().unwrap();
    assert_eq!(std::fs::read(&output).unwrap(), b"sentinel");

    // no_skip forces regeneration
    let mut cli = quiet_cli(input);
    cli.no_skip = true;
    FileProcessor::new(cli).process().unwrap();
    assert_eq!(std::fs::read(&output).unwrap(), first_written);
}

#[test]
fn test_processor_rejects_non_png_target() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, b"not an image").unwrap();

    let err = FileProcessor::new(quiet_cli(input)).process().unwrap_err();
    assert!(matches!(err, MazeError::InvalidParameter { .. }));
}

#[test]
fn test_processor_handles_directory_target() {
    let dir = tempfile::tempdir().unwrap();
    gradient_image(15, 15).save(dir.path().join("a.png")).unwrap();
    gradient_image(25, 10).save(dir.path().join("b.png")).unwrap();

    FileProcessor::new(quiet_cli(dir.path().to_path_buf()))
        .process()
        .unwrap();

    assert!(dir.path().join("a_maze.png").exists());
    assert!(dir.path().join("b_maze.png").exists());
}

#[test]
fn test_explicit_start_coordinate_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scene.png");
    gradient_image(30, 20).save(&input).unwrap();

    let mut cli = quiet_cli(input);
    cli.start_x = Some(99);
    let err = FileProcessor::new(cli).process().unwrap_err();
    assert!(matches!(err, MazeError::StartOutOfBounds { .. }));
}
