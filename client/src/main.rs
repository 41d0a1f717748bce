use std::process::ExitCode;

use clap::Parser;
use cli::Args;
use colored::Colorize;
use libgame::{Simulation, render};
use log::info;

mod cli;
mod config;
mod display;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {e:?}", "error:".bright_red());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: Args) -> anyhow::Result<()> {
    let presets = config::load_presets(args.presets.as_deref())?;
    let setup = args.resolve(&presets).unwrap_or_else(|e| e.exit());

    let board = setup.build_board(args.seed)?;
    info!(
        "running {}x{} {} board with {} alive cells for up to {} generations",
        board.width(),
        board.height(),
        board.topology(),
        board.live_count(),
        args.generations
    );

    let frames_per_row = render::frames_per_row(
        display::display_width(args.display_width),
        render::frame_width(board.width()),
    );

    let frames = Simulation::new(board, args.generations)
        .map(|(index, generation)| render::frame(&generation, &render::generation_label(index)))
        .collect::<Vec<_>>();

    print!("{}", render::tile(&frames, frames_per_row));

    Ok(())
}
