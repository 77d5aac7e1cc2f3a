//! `cw watch --once` against real files

use crate::common::TestWorkspace;
use crate::cw;
use anyhow::Result;

#[test]
fn test_watch_once_copies_file_pair() -> Result<()> {
    let ws = TestWorkspace::new();
    let source = ws.write("src/notes.txt", "first draft");
    let dest = ws.path("backup");

    let result = cw!(
        ws.root(),
        "watch",
        "--file",
        source.to_str().unwrap(),
        "--dest",
        dest.to_str().unwrap(),
        "--once"
    )
    .assert_success()?;

    assert!(result.contains_stdout("1 copied, 0 unchanged, 0 missing, 0 failed"));
    assert_eq!(ws.read("backup/notes.txt"), "first draft");
    Ok(())
}

#[test]
fn test_watch_once_loads_watch_list() -> Result<()> {
    let ws = TestWorkspace::new();
    let a = ws.write("src/a.txt", "alpha");
    let b = ws.write("src/b.txt", "beta");
    let out = ws.path("out");
    let list = ws.write_watch_list("watchlist.toml", &[(&a, &out), (&b, &out)]);

    let result = cw!(ws.root(), "watch", "--list", list.to_str().unwrap(), "--once")
        .assert_success()?;

    assert!(result.contains_stdout("Added 2 files from"));
    assert!(result.contains_stdout("2 copied"));
    assert_eq!(ws.read("out/a.txt"), "alpha");
    assert_eq!(ws.read("out/b.txt"), "beta");
    Ok(())
}

#[test]
fn test_watch_list_entries_for_missing_sources_are_skipped() -> Result<()> {
    let ws = TestWorkspace::new();
    let present = ws.write("src/here.txt", "here");
    let absent = ws.path("src/gone.txt");
    let out = ws.path("out");
    let list = ws.write_watch_list("watchlist.toml", &[(&present, &out), (&absent, &out)]);

    let result = cw!(ws.root(), "watch", "--list", list.to_str().unwrap(), "--once")
        .assert_success()?;

    assert!(result.contains_stdout("1 copied, 0 unchanged, 1 missing, 0 failed"));
    assert!(ws.exists("out/here.txt"));
    assert!(!ws.exists("out/gone.txt"));
    Ok(())
}

#[test]
fn test_watch_missing_source_fails() -> Result<()> {
    let ws = TestWorkspace::new();
    let missing = ws.path("missing.txt");
    let dest = ws.path("out");

    let result = cw!(
        ws.root(),
        "watch",
        "--file",
        missing.to_str().unwrap(),
        "--dest",
        dest.to_str().unwrap(),
        "--once"
    )
    .assert_failure()?;

    assert!(result.contains_stderr("Cannot watch"));
    assert!(!ws.exists("out"));
    Ok(())
}

#[test]
fn test_watch_file_without_dest_fails() -> Result<()> {
    let ws = TestWorkspace::new();
    let source = ws.write("a.txt", "a");

    let result = cw!(ws.root(), "watch", "--file", source.to_str().unwrap(), "--once")
        .assert_failure()?;

    assert!(result.contains_stderr("matching --dest"));
    Ok(())
}

#[test]
fn test_watch_with_nothing_to_watch_fails() -> Result<()> {
    let ws = TestWorkspace::new();

    let result = cw!(ws.root(), "watch", "--once").assert_failure()?;

    assert!(result.contains_stderr("Nothing to watch"));
    Ok(())
}

#[test]
fn test_malformed_watch_list_fails() -> Result<()> {
    let ws = TestWorkspace::new();
    let list = ws.write("watchlist.toml", "[[watchlist.files]\nfilepath = ");

    let result = cw!(ws.root(), "watch", "--list", list.to_str().unwrap(), "--once")
        .assert_failure()?;

    assert!(result.contains_stderr("Failed to load watch list"));
    Ok(())
}

#[test]
fn test_startup_watch_list_from_config() -> Result<()> {
    let ws = TestWorkspace::new();
    let source = ws.write("src/report.txt", "q3");
    let out = ws.path("out");
    let list = ws.write_watch_list("startup.toml", &[(&source, &out)]);

    cw!(ws.root(), "config", "--set", "startup.watch_list", list.to_str().unwrap())
        .assert_success()?;

    let result = cw!(ws.root(), "watch", "--once").assert_success()?;

    assert!(result.contains_stdout("Loaded 1 files from"));
    assert_eq!(ws.read("out/report.txt"), "q3");
    Ok(())
}

#[test]
fn test_interval_override_out_of_range_fails() -> Result<()> {
    let ws = TestWorkspace::new();
    let source = ws.write("a.txt", "a");
    let dest = ws.path("out");

    let result = cw!(
        ws.root(),
        "watch",
        "--file",
        source.to_str().unwrap(),
        "--dest",
        dest.to_str().unwrap(),
        "--interval-ms",
        "1",
        "--once"
    )
    .assert_failure()?;

    assert!(result.contains_stderr("--interval-ms must be between"));
    Ok(())
}

#[test]
fn test_watch_once_prints_copies_beyond_event_capacity() -> Result<()> {
    let ws = TestWorkspace::new();
    let out = ws.path("out");
    let sources: Vec<_> = ["a.txt", "b.txt", "c.txt", "d.txt"]
        .iter()
        .map(|name| ws.write(&format!("src/{name}"), name))
        .collect();
    let entries: Vec<_> = sources.iter().map(|s| (s.as_path(), out.as_path())).collect();
    let list = ws.write_watch_list("watchlist.toml", &entries);

    cw!(ws.root(), "config", "--set", "watcher.event_capacity", "2").assert_success()?;

    let result = cw!(ws.root(), "watch", "--list", list.to_str().unwrap(), "--once")
        .assert_success()?;

    assert!(result.contains_stdout("4 copied"));
    // Older events were overwritten, the newest ones are still printed
    assert!(result.contains_stdout("d.txt ->"));
    Ok(())
}
