//! tile-stroke - render map tiles from the command line
//!
//! Usage:
//!   tile-stroke render <tile.json> -o tile.png           Rasterize a tile
//!   tile-stroke render <tile.json> --format svg --dash 4,2
//!   tile-stroke render - --format json < tile.json       Dump path commands
//!
//! Set `RUST_LOG=debug` to see skipped line parts and seam pen-lifts.

mod cli;

use clap::{Parser, Subcommand};

use cli::render::{RenderArgs, cmd_render};

#[derive(Parser, Debug)]
#[command(name = "tile-stroke", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a tile's features to PNG, SVG or JSON path commands
    Render(RenderArgs),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Render(args) => cmd_render(&args),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
