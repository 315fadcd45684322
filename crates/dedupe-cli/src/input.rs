//! Line-based input handling.
//!
//! Each line typed on stdin is resolved into an [`InputAction`]. Filter
//! edits use `field=value`, where `field` is one of the form keys
//! (`search`, `file_type`, `min_size`, `max_size`, `date_filter`,
//! `start_date`, `end_date`). Sizes are typed in KB.

use std::path::PathBuf;

use dedupe_core::{FilterEdit, FilterField};
use uuid::Uuid;

pub const HELP: &str = "\
commands:
  <field>=<value>   edit a filter (sizes in KB, empty value clears)
  reset             clear all filters
  flush             apply pending filter edits now
  upload <path>     upload a file
  delete <id>       delete a file record
  show              print the current filter state
  stats             print the storage statistics
  help              show this message
  quit              exit";

/// What the main loop should do with a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Edit(FilterEdit),
    Reset,
    Flush,
    Upload(PathBuf),
    Delete(Uuid),
    Show,
    Stats,
    Help,
    Quit,
    /// Blank line.
    None,
    /// The line could not be understood; carries the reason.
    Invalid(String),
}

pub fn parse_line(line: &str) -> InputAction {
    let trimmed = line.trim();
    if let Some((command, arg)) = trimmed.split_once(char::is_whitespace) {
        let arg = arg.trim();
        match command {
            "upload" => return InputAction::Upload(PathBuf::from(arg)),
            "delete" => {
                return match arg.parse::<Uuid>() {
                    Ok(id) => InputAction::Delete(id),
                    Err(_) => InputAction::Invalid(format!("not a file id: '{arg}'")),
                }
            }
            _ => {}
        }
    }

    if let Some((key, value)) = line.trim_end_matches(['\r', '\n']).split_once('=') {
        let field = match key.trim().parse::<FilterField>() {
            Ok(field) => field,
            Err(_) => return InputAction::Invalid(format!("unknown field '{}'", key.trim())),
        };
        return match field.parse_input(value) {
            Ok(edit) => InputAction::Edit(edit),
            Err(e) => InputAction::Invalid(e.to_string()),
        };
    }

    match trimmed {
        "" => InputAction::None,
        "upload" | "delete" => InputAction::Invalid(format!("usage: {trimmed} <argument>")),
        "reset" => InputAction::Reset,
        "flush" => InputAction::Flush,
        "show" => InputAction::Show,
        "stats" => InputAction::Stats,
        "help" | "?" => InputAction::Help,
        "quit" | "exit" | "q" => InputAction::Quit,
        other => InputAction::Invalid(format!("unknown command '{other}'")),
    }
}
