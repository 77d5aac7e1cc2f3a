//! Watch-list document parsing
//!
//! A watch list is a TOML document. The first key named `files` (any case,
//! searched depth-first in document order) holds the file entries, either as
//! an array of tables or as a table with a `file` array:
//!
//! ```toml
//! [watchlist]
//!
//! [[watchlist.files]]
//! filepath = "notes/todo.md"
//! destination = "/mnt/backup/notes"
//! ```
//!
//! Entries missing `filepath` or `destination`, or carrying blank values, are
//! skipped. Only a document that fails to parse is an error.

use crate::{Result, WatchListError, WatchSpec};
use toml::{Table, Value};
use tracing::debug;

const FILES_KEY: &str = "files";
const FILE_KEY: &str = "file";
const FILEPATH_KEY: &str = "filepath";
const DESTINATION_KEY: &str = "destination";

/// Parse a watch-list document into source/destination pairs
///
/// Returns the pairs in document order. A document without a files section
/// (including an empty one) yields no pairs and is not an error.
pub fn parse_watch_list(text: &str) -> Result<Vec<WatchSpec>> {
    let document: Table = text.parse().map_err(|e: toml::de::Error| WatchListError::Parse {
        message: e.message().trim().to_string(),
    })?;

    let Some(files) = find_files_section(&document) else {
        debug!("Watch list has no files section");
        return Ok(Vec::new());
    };

    let elements = file_elements(files);
    let mut specs = Vec::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        match spec_from_element(element) {
            Some(spec) => specs.push(spec),
            None => debug!("Skipping incomplete watch-list entry #{}", index + 1),
        }
    }

    Ok(specs)
}

/// Depth-first search for the first `files` key
fn find_files_section(table: &Table) -> Option<&Value> {
    for (key, value) in table {
        if key.eq_ignore_ascii_case(FILES_KEY) {
            return Some(value);
        }

        if let Some(found) = child_tables(value).into_iter().find_map(find_files_section) {
            return Some(found);
        }
    }

    None
}

/// Tables directly reachable from a value (a table, or the tables of an array)
fn child_tables(value: &Value) -> Vec<&Table> {
    match value {
        Value::Table(table) => vec![table],
        Value::Array(items) => items.iter().filter_map(Value::as_table).collect(),
        _ => Vec::new(),
    }
}

fn file_elements(files: &Value) -> Vec<&Table> {
    match files {
        Value::Array(_) => child_tables(files),
        Value::Table(section) => section
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(FILE_KEY))
            .flat_map(|(_, value)| child_tables(value))
            .collect(),
        _ => Vec::new(),
    }
}

fn spec_from_element(element: &Table) -> Option<WatchSpec> {
    let filepath = lookup(element, FILEPATH_KEY)?;
    let destination = lookup(element, DESTINATION_KEY)?;
    Some(WatchSpec::new(filepath, destination))
}

/// Case-insensitive key lookup; blank or non-string values count as missing
fn lookup<'a>(element: &'a Table, name: &str) -> Option<&'a str> {
    element
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, value)| value.as_str())
        .filter(|value| !value.trim().is_empty())
}
