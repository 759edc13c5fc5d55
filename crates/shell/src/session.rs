//! Interactive session: reads command lines, drives the inventory, renders output.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use congo_core::DomainResult;
use congo_inventory::{InventoryManager, Item};

use crate::command::{ShellCommand, USAGE};

pub const ABOUT: &str = "\
Congo Storage Management System
Keeps an in-memory inventory of items by ID, description and location.";

/// Whether the read loop should keep going after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One shell session owning the process' single [`InventoryManager`].
#[derive(Debug)]
pub struct Session<W> {
    manager: InventoryManager,
    out: W,
    prompt: Option<String>,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self {
            manager: InventoryManager::new(),
            out,
            prompt: None,
        }
    }

    /// Print `prompt` before reading each line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn manager(&self) -> &InventoryManager {
        &self.manager
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Process lines from `input` until EOF or an `exit` command.
    ///
    /// A line that is not valid UTF-8 is reported and skipped; only IO errors
    /// on the streams themselves end the session early.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.out, "{prompt}")?;
                self.out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                return Ok(());
            }

            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => self.execute_line(line)?,
                Err(err) => {
                    warn!(error = %err, "skipping line that is not valid UTF-8");
                    writeln!(self.out, "error: input is not valid UTF-8")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Parse and run a single line, rendering any error to the output.
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        match ShellCommand::parse(line) {
            Ok(Some(command)) => self.dispatch(command),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                warn!(error = %err, "could not parse command");
                writeln!(self.out, "error: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn dispatch(&mut self, command: ShellCommand) -> io::Result<Flow> {
        debug!(?command, "dispatching command");

        match command {
            ShellCommand::Add {
                id,
                description,
                location,
            } => {
                let result = self.manager.add_item(id, description, location);
                self.after_mutation(result)?;
            }
            ShellCommand::Find { id } => match self.manager.find_by_id(id.as_str()) {
                Ok(item) => render_details(&mut self.out, item)?,
                Err(err) => writeln!(self.out, "error: {err}")?,
            },
            ShellCommand::Remove { id } => {
                let result = self.manager.remove_item(id);
                self.after_mutation(result)?;
            }
            ShellCommand::List => self.render_listing()?,
            ShellCommand::Export => {
                let items = self.manager.list_items_by_description();
                let json = serde_json::to_string_pretty(&items).map_err(io::Error::other)?;
                writeln!(self.out, "{json}")?;
            }
            ShellCommand::About => writeln!(self.out, "{ABOUT}")?,
            ShellCommand::Help => writeln!(self.out, "{USAGE}")?,
            ShellCommand::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Successful mutations refresh the listing; failures are reported.
    fn after_mutation(&mut self, result: DomainResult<()>) -> io::Result<()> {
        match result {
            Ok(()) => self.render_listing(),
            Err(err) => writeln!(self.out, "error: {err}"),
        }
    }

    fn render_listing(&mut self) -> io::Result<()> {
        let items = self.manager.list_items_by_description();
        if items.is_empty() {
            return writeln!(self.out, "(no items)");
        }
        for item in items {
            writeln!(self.out, "{} ({})", item.description(), item.id())?;
        }
        Ok(())
    }
}

fn render_details<W: Write>(out: &mut W, item: &Item) -> io::Result<()> {
    writeln!(out, "ID: {}", item.id())?;
    writeln!(out, "Description: {}", item.description())?;
    writeln!(out, "Location: {}", item.location())
}
