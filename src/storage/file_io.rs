//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

/// Result of reading a JSON file that may be absent or blank
#[derive(Debug)]
pub enum JsonRead<T> {
    /// File does not exist
    Missing,
    /// File exists but holds only whitespace
    Blank,
    /// File parsed successfully
    Parsed(T),
}

/// Read JSON from a file, distinguishing absent and blank files
///
/// A file that exists but does not parse as `T` is reported as
/// `ExpenseError::CorruptStore`.
pub fn read_json<T, P>(path: P) -> Result<JsonRead<T>, ExpenseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(JsonRead::Missing);
    }

    // Raw bytes: invalid UTF-8 is a decode failure, not an I/O failure
    let contents = fs::read(path).map_err(|e| {
        ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    if contents.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonRead::Blank);
    }

    serde_json::from_slice(&contents)
        .map(JsonRead::Parsed)
        .map_err(|e| ExpenseError::CorruptStore {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The target is either fully replaced or left untouched.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = sibling_path(path, ".tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, data)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Copy an unreadable file aside so a later save cannot destroy it
///
/// Returns the path of the copy, `<name>.corrupt-YYYYmmdd-HHMMSS`.
pub fn quarantine<P: AsRef<Path>>(path: P) -> Result<PathBuf, ExpenseError> {
    let path = path.as_ref();
    let now = Utc::now();
    let mut target = sibling_path(path, &format!(".corrupt-{}", now.format("%Y%m%d-%H%M%S")));

    // Two recoveries within the same second must not overwrite each other
    let mut attempt = 1;
    while target.exists() {
        target = sibling_path(
            path,
            &format!(".corrupt-{}-{}", now.format("%Y%m%d-%H%M%S"), attempt),
        );
        attempt += 1;
    }

    fs::copy(path, &target).map_err(|e| {
        ExpenseError::Storage(format!(
            "Failed to quarantine {} to {}: {}",
            path.display(),
            target.display(),
            e
        ))
    })?;

    Ok(target)
}

/// `path` with `suffix` appended to its file name
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("expenses.json"));
    name.push(suffix);
    path.with_file_name(name)
}
