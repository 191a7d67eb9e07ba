use crate::error::{FlaliasError, Result};
use crate::project_identity;
use chrono::Local;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Lines this tool considers its own. Nothing else is ever removed.
static MANAGED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^alias [0-9a-z][0-9a-z-]*="flatpak run [^"]+"$"#).expect("Invalid regex pattern")
});

/// Canonical alias line for one entry, without trailing newline.
pub fn alias_line(name: &str, app_id: &str) -> String {
    format!(r#"alias {}="{} {}""#, name, project_identity::RUNNER, app_id)
}

pub fn is_managed_line(line: &str) -> bool {
    MANAGED_LINE.is_match(line)
}

#[derive(Debug, Default)]
pub struct AddOutcome {
    pub appended: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(usize),
    NotFound,
}

/// Merge alias entries into the rc file.
///
/// The file is read in full first; a missing file is fatal, never created.
/// Entries whose exact line text is already present are skipped. Queued
/// lines are appended in one write, original content untouched.
pub fn add_aliases(path: &Path, entries: &[(String, String)]) -> Result<AddOutcome> {
    let content = read_rc(path)?;
    let existing: HashSet<&str> = content.lines().collect();

    let mut outcome = AddOutcome::default();
    let mut queued: Vec<String> = Vec::new();

    for (name, app_id) in entries {
        let line = alias_line(name, app_id);
        if existing.contains(line.as_str()) {
            outcome.skipped.push(name.clone());
        } else {
            queued.push(line);
            outcome.appended.push(name.clone());
        }
    }

    if queued.is_empty() {
        return Ok(outcome);
    }

    let mut next = content;
    if !next.is_empty() && !next.ends_with('\n') {
        next.push('\n');
    }
    for line in &queued {
        next.push_str(line);
        next.push('\n');
    }

    write_atomically(path, &next)?;
    Ok(outcome)
}

/// Remove the line(s) for one alias name. Idempotent: an absent alias
/// reports `NotFound` and leaves the file untouched.
pub fn remove_alias(path: &Path, name: &str) -> Result<RemoveOutcome> {
    let content = read_rc(path)?;
    let prefix = format!("alias {}=", name);
    partition_rewrite(path, &content, |line| line.starts_with(&prefix))
}

/// Remove every managed alias line, leaving all other lines in place.
pub fn remove_all(path: &Path) -> Result<RemoveOutcome> {
    let content = read_rc(path)?;
    partition_rewrite(path, &content, is_managed_line)
}

/// Copy the rc file to a timestamped sibling before a rewrite.
pub fn create_backup(path: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = path.with_extension(format!("backup.{}", timestamp));

    fs::copy(path, &backup_path).map_err(|e| FlaliasError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(backup_path)
}

fn read_rc(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FlaliasError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn partition_rewrite(
    path: &Path,
    content: &str,
    matched: impl Fn(&str) -> bool,
) -> Result<RemoveOutcome> {
    let mut retained: Vec<&str> = Vec::new();
    let mut removed = 0usize;

    for line in content.lines() {
        if matched(line) {
            removed += 1;
        } else {
            retained.push(line);
        }
    }

    if removed == 0 {
        return Ok(RemoveOutcome::NotFound);
    }

    let mut next = retained.join("\n");
    if !next.is_empty() {
        next.push('\n');
    }

    write_atomically(path, &next)?;
    Ok(RemoveOutcome::Removed(removed))
}

fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().ok_or_else(|| {
        FlaliasError::PathError(format!(
            "Invalid target path (no parent directory): {}",
            path.display()
        ))
    })?;

    let file_name = path
        .file_name()
        .ok_or_else(|| FlaliasError::PathError(format!("Invalid target path: {}", path.display())))?
        .to_string_lossy();

    let tmp_path = dir.join(format!(".{}.tmp", file_name));
    let mut tmp_file = fs::File::create(&tmp_path).map_err(|e| FlaliasError::IoError {
        path: tmp_path.clone(),
        source: e,
    })?;

    tmp_file.write_all(content.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| FlaliasError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
