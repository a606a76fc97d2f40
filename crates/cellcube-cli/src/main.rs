//! cellcube CLI - Seamless cube textures from 3D cellular noise
//!
//! This binary generates cube atlases, prints UV maps for subdivided cube
//! meshes, and inspects or validates atlas inputs.

use clap::Parser;
use std::process::ExitCode;

mod cli_args;

use cellcube_cli::{commands, logging};
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            params,
            out_root,
            stem,
            json,
        } => commands::generate::run(
            params.config.as_deref(),
            &params.overrides(),
            out_root.as_deref(),
            &stem,
            json,
        ),
        Commands::Validate { params, json } => {
            commands::validate::run(params.config.as_deref(), &params.overrides(), json)
        }
        Commands::Uv { segs, json } => commands::uv::run(segs, json),
        Commands::Inspect { file, json } => commands::inspect::run(&file, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
