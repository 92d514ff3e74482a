//! Command-line interface for generating image-colored mazes

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::algorithm::MazeGenerator;
use crate::grid::Mask;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_SEED, DEFAULT_WALL_THICKNESS, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{derived_grid_size, export_maze_image, load_source_image};
use crate::io::progress::ProgressManager;
use crate::render::{MazeRenderer, RenderOptions};

#[derive(Parser)]
#[command(name = "mazetint")]
#[command(
    author,
    version,
    about = "Generate perfect mazes with wall colors sampled from the source image"
)]
/// Command-line arguments for the maze generation tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Cell size in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Wall thickness in pixels
    #[arg(short, long, default_value_t = DEFAULT_WALL_THICKNESS)]
    pub wall_thickness: u32,

    /// Generation start column (defaults to the grid center)
    #[arg(long)]
    pub start_x: Option<usize>,

    /// Generation start row (defaults to the grid center)
    #[arg(long)]
    pub start_y: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates maze generation across one or more PNG files
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or any per-file pipeline stage
    /// fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(pm) = &mut self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for skip messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback on completion
    #[allow(clippy::print_stderr)]
    fn process_file(&self, input_path: &Path) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(pm) = &self.progress_manager {
            pm.start_file(input_path);
        }

        let source = load_source_image(input_path)?;
        let (grid_width, grid_height) = derived_grid_size(&source, self.cli.cell_size)?;

        let mask = Mask::all_passable(grid_width, grid_height);
        let start_x = self.cli.start_x.unwrap_or(grid_width / 2);
        let start_y = self.cli.start_y.unwrap_or(grid_height / 2);

        let mut generator = MazeGenerator::new(self.cli.seed);
        let maze = generator.generate(&mask, start_x, start_y)?;

        let renderer = MazeRenderer::new(
            &source,
            RenderOptions {
                cell_size: self.cli.cell_size,
                wall_thickness: self.cli.wall_thickness,
            },
        )?;
        let canvas = renderer.render(&maze);

        export_maze_image(&canvas, &output_path)?;

        if !self.cli.quiet {
            eprintln!(
                "Saved: {} ({} passages carved)",
                output_path.display(),
                maze.removed_wall_pairs()
            );
        }

        if let Some(pm) = &self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
