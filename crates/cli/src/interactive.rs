//! Interactive console
//!
//! Reads commands line by line until the user asks to start watching or
//! input runs out. Generic over the reader and writer so tests can drive it
//! with in-memory buffers.

use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use watcher::FileWatcher;

/// A line typed at the main menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// Enter one file and destination directory
    Directly,
    /// Load a watch list from disk
    FromFile,
    /// Leave the menu and start watching
    Start,
    Unrecognized(String),
}

impl MenuCommand {
    pub fn parse(line: &str) -> Self {
        let normalized = line.trim().to_lowercase();
        match normalized.as_str() {
            "directly" => MenuCommand::Directly,
            "from file" => MenuCommand::FromFile,
            "start" => MenuCommand::Start,
            _ => MenuCommand::Unrecognized(line.trim().to_string()),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// User typed `start`
    Start,
    /// Input closed before `start`
    EndOfInput,
}

enum Step {
    Continue,
    InputClosed,
}

/// Run the menu loop against `watcher`
pub fn run_session<R, W>(watcher: &FileWatcher, mut input: R, mut output: W) -> io::Result<SessionEnd>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", format!("copywatch {}", env!("CARGO_PKG_VERSION")).bold())?;

    loop {
        print_menu(&mut output)?;

        let Some(line) = prompt(&mut input, &mut output, "> ")? else {
            return Ok(SessionEnd::EndOfInput);
        };

        let step = match MenuCommand::parse(&line) {
            MenuCommand::Directly => add_directly(watcher, &mut input, &mut output)?,
            MenuCommand::FromFile => add_from_file(watcher, &mut input, &mut output)?,
            MenuCommand::Start => {
                writeln!(output, "Starting")?;
                return Ok(SessionEnd::Start);
            }
            MenuCommand::Unrecognized(text) => {
                writeln!(output, "{} Unrecognized command: '{}'", "✗".red(), text)?;
                Step::Continue
            }
        };

        if let Step::InputClosed = step {
            return Ok(SessionEnd::EndOfInput);
        }
    }
}

fn print_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", "Commands:".yellow())?;
    writeln!(output, "  {}  - enter a file and destination directly", "directly".cyan())?;
    writeln!(output, "  {} - load files and directories from a watch list", "from file".cyan())?;
    writeln!(output, "  {}     - start the watcher", "start".cyan())?;
    Ok(())
}

fn add_directly<R: BufRead, W: Write>(
    watcher: &FileWatcher,
    input: &mut R,
    output: &mut W,
) -> io::Result<Step> {
    let Some(filename) = prompt(input, output, "Enter filename: ")? else {
        return Ok(Step::InputClosed);
    };
    if filename.is_empty() {
        writeln!(output, "{} Filename was empty", "✗".red())?;
        return Ok(Step::Continue);
    }

    let Some(directory) = prompt(input, output, "Enter directory: ")? else {
        return Ok(Step::InputClosed);
    };
    if directory.is_empty() {
        writeln!(output, "{} Directory was empty", "✗".red())?;
        return Ok(Step::Continue);
    }

    match watcher.add_file_to_watch(&filename, &directory) {
        Ok(()) => writeln!(output, "{} Added watcher for {}", "✓".green(), filename)?,
        Err(e) => writeln!(output, "{} {}", "✗".red(), e)?,
    }
    Ok(Step::Continue)
}

fn add_from_file<R: BufRead, W: Write>(
    watcher: &FileWatcher,
    input: &mut R,
    output: &mut W,
) -> io::Result<Step> {
    let Some(path) = prompt(input, output, "Enter watch list to read from: ")? else {
        return Ok(Step::InputClosed);
    };
    if path.is_empty() {
        writeln!(output, "{} Filename was empty", "✗".red())?;
        return Ok(Step::Continue);
    }

    match watcher.add_files_from_list(&path) {
        Ok(added) => writeln!(output, "{} Added {} files from {}", "✓".green(), added, path)?,
        Err(e) => writeln!(output, "{} {}", "✗".red(), e)?,
    }
    Ok(Step::Continue)
}

/// Print `label`, read one trimmed line; `None` once input is exhausted
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
