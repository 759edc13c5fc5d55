//! Parsing of shell input lines into commands.

use congo_core::ItemId;
use thiserror::Error;

/// Separator between the fields of an `add` line.
pub const FIELD_SEPARATOR: char = '|';

pub const USAGE: &str = "\
commands:
  add <id> | <description> | <location>   register a new item
  find <id>                               show one item
  remove <id>                             remove an item
  list                                    list items sorted by description
  export                                  print the sorted listing as JSON
  about                                   about this program
  help                                    show this help
  exit | quit                             leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add {
        id: ItemId,
        description: String,
        location: String,
    },
    Find {
        id: ItemId,
    },
    Remove {
        id: ItemId,
    },
    List,
    Export,
    About,
    Help,
    Exit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("missing argument; usage: {0}")]
    MissingArgument(&'static str),

    #[error("expected 3 fields separated by '|', found {0}; usage: add <id> | <description> | <location>")]
    FieldCount(usize),

    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),
}

impl ShellCommand {
    /// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => Self::parse_add(rest)?,
            "find" => ShellCommand::Find {
                id: required_id(rest, "find <id>")?,
            },
            "remove" => ShellCommand::Remove {
                id: required_id(rest, "remove <id>")?,
            },
            "list" => no_args(rest, "list", ShellCommand::List)?,
            "export" => no_args(rest, "export", ShellCommand::Export)?,
            "about" => no_args(rest, "about", ShellCommand::About)?,
            "help" => no_args(rest, "help", ShellCommand::Help)?,
            "exit" => no_args(rest, "exit", ShellCommand::Exit)?,
            "quit" => no_args(rest, "quit", ShellCommand::Exit)?,
            _ => return Err(ParseError::UnknownCommand(verb.to_string())),
        };

        Ok(Some(command))
    }

    fn parse_add(rest: &str) -> Result<Self, ParseError> {
        if rest.is_empty() {
            return Err(ParseError::MissingArgument(
                "add <id> | <description> | <location>",
            ));
        }

        let fields: Vec<&str> = rest.split(FIELD_SEPARATOR).map(str::trim).collect();
        match fields.as_slice() {
            [id, description, location] => Ok(ShellCommand::Add {
                id: ItemId::from(*id),
                description: description.to_string(),
                location: location.to_string(),
            }),
            _ => Err(ParseError::FieldCount(fields.len())),
        }
    }
}

fn required_id(rest: &str, usage: &'static str) -> Result<ItemId, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument(usage));
    }
    Ok(ItemId::from(rest))
}

fn no_args(
    rest: &str,
    verb: &'static str,
    command: ShellCommand,
) -> Result<ShellCommand, ParseError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::UnexpectedArgument(verb))
    }
}
