//! Custom assertions for E2E tests

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Assert that a file holds exactly `expected`
pub fn assert_file_contents(path: &Path, expected: &str) -> Result<(), String> {
    let actual = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    if actual == expected {
        Ok(())
    } else {
        Err(format!(
            "Unexpected contents in {}: expected {:?}, got {:?}",
            path.display(),
            expected,
            actual
        ))
    }
}

/// Assert that a file was never created
pub fn assert_not_created(path: &Path) -> Result<(), String> {
    if path.exists() {
        Err(format!("{} exists but should not have been created", path.display()))
    } else {
        Ok(())
    }
}

/// Assert that group and other have no write permission on a file
pub fn assert_not_group_or_world_writable(path: &Path) -> Result<(), String> {
    let mode = fs::metadata(path)
        .map_err(|e| format!("Failed to stat {}: {}", path.display(), e))?
        .permissions()
        .mode();

    if mode & 0o022 == 0 {
        Ok(())
    } else {
        Err(format!("{} has mode {:o}, expected no group/other write", path.display(), mode & 0o7777))
    }
}

/// Assert that a `ls -l /proc/<pid>/fd` listing shows `target` open on
/// descriptor 1 and on no other descriptor
pub fn assert_only_stdout_refers_to(listing: &str, target: &Path) -> Result<(), String> {
    let target = target.display().to_string();
    let holders: Vec<&str> = listing
        .lines()
        .filter(|line| line.trim_end().ends_with(&format!("-> {}", target)))
        .collect();

    match holders.as_slice() {
        [line] if line.contains(" 1 -> ") => Ok(()),
        _ => Err(format!(
            "Expected {} on fd 1 only, found on: {:?}\nListing:\n{}",
            target, holders, listing
        )),
    }
}
