//! CLI argument definitions for the cellcube command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use cellcube_cli::commands::generate::DEFAULT_STEM;
use cellcube_cli::input::{parse_rgb, ParamOverrides};
use clap::{Args, Parser, Subcommand};

/// cellcube - Seamless cube textures from 3D cellular noise
#[derive(Parser)]
#[command(name = "cellcube")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Print debug diagnostics to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Parameter flags shared by `generate` and `validate`.
#[derive(Args, Debug, Default)]
pub(crate) struct ParamArgs {
    /// JSON parameter file; flags below override its fields
    #[arg(short, long)]
    pub config: Option<String>,

    /// Noise type (base, edges, rounded, transparent)
    #[arg(short, long, conflicts_with = "file")]
    pub noise: Option<String>,

    /// Existing atlas PNG to use instead of generating one
    #[arg(short, long)]
    pub file: Option<String>,

    /// Extent of the sampling grid along each axis
    #[arg(short, long)]
    pub grid: Option<f64>,

    /// Pixels per face edge
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Cube edge length for the mesh builder
    #[arg(long)]
    pub box_size: Option<f64>,

    /// Quads per face edge for the mesh builder
    #[arg(long)]
    pub segs: Option<u32>,

    /// Seed for the cellular feature points (random when omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Offset added to every sample coordinate (derived from the seed when omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<f64>,

    /// Edge color as r,g,b in 0.0-1.0
    #[arg(long, value_parser = parse_rgb)]
    pub edge_color: Option<[f64; 3]>,

    /// Append a timestamp to the artifact name
    #[arg(long)]
    pub timestamp: bool,
}

impl ParamArgs {
    pub fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            noise: self.noise.clone(),
            file: self.file.clone(),
            grid_extent: self.grid,
            size: self.size,
            box_size: self.box_size,
            box_segs: self.segs,
            seed: self.seed,
            offset: self.offset,
            edge_color: self.edge_color,
            timestamp: self.timestamp,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a cube atlas and its metadata sidecar
    Generate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Artifact file stem
        #[arg(long, default_value = DEFAULT_STEM)]
        stem: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate parameters without generating anything
    Validate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print cube UV coordinates in mesh-builder vertex order
    Uv {
        /// Quads per face edge
        #[arg(long, default_value_t = 5)]
        segs: u32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Report the layout of an existing atlas image
    Inspect {
        /// Path to the atlas PNG
        #[arg(short, long)]
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
