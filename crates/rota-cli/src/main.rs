//! Rota CLI Application
//!
//! Command-line interface for the rota class timetable manager.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use handlers::Cli;
use log::info;
use renderer::Renderer;
use rota_core::TimetableBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args { data_file, no_color, command } = Args::parse();

    let manager = TimetableBuilder::new()
        .with_data_path(data_file)
        .build()
        .context("Failed to initialize timetable manager")?;

    let renderer = Renderer::new(!no_color);

    info!("Rota started");

    Cli::new(manager, renderer).run(command)
}
