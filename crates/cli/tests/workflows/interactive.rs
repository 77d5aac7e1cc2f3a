//! Interactive console driven through stdin

use crate::common::TestWorkspace;
use crate::cw;
use anyhow::Result;

#[test]
fn test_closed_stdin_exits_cleanly() -> Result<()> {
    let ws = TestWorkspace::new();

    let result = cw!(ws.root(), "interactive").assert_success()?;

    assert!(result.contains_stdout("Commands:"));
    assert!(result.contains_stdout("Input closed before start"));
    Ok(())
}

#[test]
fn test_default_command_is_interactive() -> Result<()> {
    let ws = TestWorkspace::new();

    let mut cmd = crate::common::cli::CwCommand::new(ws.root());
    let result = cmd.stdin("").assert_success()?;

    assert!(result.contains_stdout("Commands:"));
    Ok(())
}

#[test]
fn test_unrecognized_command_is_reported() -> Result<()> {
    let ws = TestWorkspace::new();

    let result = cw!(ws.root(), "interactive")
        .stdin("dance\n")
        .assert_success()?;

    assert!(result.contains_stdout("Unrecognized command: 'dance'"));
    assert_eq!(result.stdout.matches("Commands:").count(), 2);
    Ok(())
}

#[test]
fn test_directly_registers_file() -> Result<()> {
    let ws = TestWorkspace::new();
    let source = ws.write("src/todo.txt", "milk");
    let dest = ws.path("out");
    let script = format!("directly\n{}\n{}\n", source.display(), dest.display());

    let result = cw!(ws.root(), "interactive")
        .stdin(&script)
        .assert_success()?;

    assert!(result.contains_stdout("Added watcher for"));
    // Nothing is copied until the watcher starts
    assert!(!ws.exists("out/todo.txt"));
    Ok(())
}

#[test]
fn test_from_file_reports_count() -> Result<()> {
    let ws = TestWorkspace::new();
    let a = ws.write("src/a.txt", "a");
    let out = ws.path("out");
    let list = ws.write_watch_list("watchlist.toml", &[(&a, &out)]);
    let script = format!("from file\n{}\n", list.display());

    let result = cw!(ws.root(), "interactive")
        .stdin(&script)
        .assert_success()?;

    assert!(result.contains_stdout("Added 1 files from"));
    Ok(())
}
