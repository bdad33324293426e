use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddEntryArgs, DeleteEntryArgs, ListEntriesArgs, ShowEntryArgs, UpdateEntryArgs};

/// Main command-line interface for the rota timetable tool
///
/// Rota manages a weekly class timetable: scheduled entries with a
/// subject, teacher, room, day and time range. It validates every change
/// against the collection's double-booking rules and keeps the snapshot
/// file on disk in sync with each mutation.
#[derive(Parser)]
#[command(version, about, name = "rota")]
pub struct Args {
    /// Path to the JSON snapshot file. Defaults to
    /// $XDG_DATA_HOME/rota/timetable.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the rota CLI
///
/// Each subcommand maps onto one manager operation; running with no
/// subcommand lists the full timetable.
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new timetable entry
    #[command(alias = "a")]
    Add(AddEntryArgs),
    /// List timetable entries
    #[command(aliases = ["l", "ls"])]
    List(ListEntriesArgs),
    /// Show details of a specific entry
    #[command(alias = "s")]
    Show(ShowEntryArgs),
    /// Update an entry's fields
    #[command(alias = "u")]
    Update(UpdateEntryArgs),
    /// Delete an entry permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteEntryArgs),
}
