//! Command handlers bridging parsed arguments to the core manager.
//!
//! Every core operation can fail with a validation error; handlers let
//! those errors bubble up through anyhow so `main` reports them without
//! crashing, and render successful outcomes through the display wrappers.

use anyhow::{bail, Result};
use rota_core::{
    display::{CreateResult, DeleteResult, Entries, UpdateResult},
    params::{ListEntries, UpdateEntry},
    TimetableManager,
};

use crate::{
    args::Commands,
    cli::{AddEntryArgs, DeleteEntryArgs, ListEntriesArgs, ShowEntryArgs, UpdateEntryArgs},
    renderer::Renderer,
};

/// Dispatcher owning the manager and the output renderer.
pub struct Cli {
    manager: TimetableManager,
    renderer: Renderer,
}

impl Cli {
    pub fn new(manager: TimetableManager, renderer: Renderer) -> Self {
        Self { manager, renderer }
    }

    /// Runs the selected command; no command lists the full timetable.
    pub fn run(mut self, command: Option<Commands>) -> Result<()> {
        match command {
            Some(Commands::Add(args)) => self.add_entry(args),
            Some(Commands::List(args)) => self.list_entries(args),
            Some(Commands::Show(args)) => self.show_entry(args),
            Some(Commands::Update(args)) => self.update_entry(args),
            Some(Commands::Delete(args)) => self.delete_entry(args),
            None => self.list_entries(ListEntriesArgs::default()),
        }
    }

    fn add_entry(&mut self, args: AddEntryArgs) -> Result<()> {
        let entry = self.manager.add_entry(&args.into())?;
        self.renderer.render(&CreateResult::new(entry).to_string())
    }

    fn list_entries(&self, args: ListEntriesArgs) -> Result<()> {
        let params: ListEntries = args.into();
        let heading = match params.day_filter()? {
            Some(day) => format!("# Timetable for {day}"),
            None => "# Timetable".to_string(),
        };

        let entries = Entries(self.manager.list_entries(&params)?);
        self.renderer
            .render(&format!("{heading}\n\n{entries}"))
    }

    fn show_entry(&self, args: ShowEntryArgs) -> Result<()> {
        let id = args.id.clone();
        match self.manager.find_by_id(&args.into()) {
            Some(entry) => self.renderer.render(&entry.to_string()),
            None => bail!("Entry with ID {id} not found"),
        }
    }

    fn update_entry(&mut self, args: UpdateEntryArgs) -> Result<()> {
        let params: UpdateEntry = args.into();
        if params.is_empty() {
            bail!("No fields to update; pass at least one of --subject, --teacher, --room, --day, --start, --end or --notes");
        }

        let changes = describe_changes(&params);
        let entry = self.manager.update_entry(&params)?;
        self.renderer
            .render(&UpdateResult::with_changes(entry, changes).to_string())
    }

    fn delete_entry(&mut self, args: DeleteEntryArgs) -> Result<()> {
        if !args.confirm {
            bail!("Entry deletion requires explicit confirmation. Pass --confirm to proceed with permanent deletion.");
        }

        let entry = self.manager.delete_entry(&args.into())?;
        self.renderer.render(&DeleteResult::new(entry).to_string())
    }
}

/// Human-readable change list for the update confirmation output.
fn describe_changes(params: &UpdateEntry) -> Vec<String> {
    let mut changes = Vec::new();
    if params.subject.is_some() {
        changes.push("Updated subject".to_string());
    }
    if params.teacher.is_some() {
        changes.push("Updated teacher".to_string());
    }
    if params.room.is_some() {
        changes.push("Updated room".to_string());
    }
    if params.day.is_some() || params.start_time.is_some() || params.end_time.is_some() {
        changes.push("Moved time slot".to_string());
    }
    if params.notes.is_some() {
        changes.push("Updated notes".to_string());
    }
    changes
}
