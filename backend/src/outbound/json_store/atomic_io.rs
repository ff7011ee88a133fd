//! Atomic document replacement.
//!
//! Documents are written to a hidden temporary file next to the target and
//! renamed over it, so readers never observe a partially written file.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::domain::ports::RecordStoreError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `file_name` inside `dir` with `contents`.
///
/// `display_path` is only used in error messages.
///
/// # Errors
///
/// Returns [`RecordStoreError::Io`] when `file_name` is not a bare file name
/// or when the temporary file cannot be written or renamed.
pub(crate) fn write_atomic(
    dir: &Dir,
    file_name: &Utf8Path,
    display_path: &str,
    contents: &str,
) -> Result<(), RecordStoreError> {
    let name = bare_name(file_name, display_path)?;
    let tmp_name = temp_name(name);

    write_temp_file(dir, &tmp_name, contents)
        .map_err(|err| RecordStoreError::io(display_path, err.to_string()))?;
    if let Err(err) = dir.rename(&tmp_name, dir, name) {
        drop(dir.remove_file(&tmp_name));
        return Err(RecordStoreError::io(display_path, err.to_string()));
    }
    sync_directory(dir);
    Ok(())
}

/// Create `file_name` inside `dir` with `contents` unless it already exists.
///
/// The fully written temporary file is hard-linked into place, which fails
/// when the target exists, so an existing document is never replaced.
/// Returns `false` when the document was already present.
///
/// # Errors
///
/// Returns [`RecordStoreError::Io`] when `file_name` is not a bare file name
/// or when the temporary file cannot be written or linked.
pub(crate) fn create_atomic(
    dir: &Dir,
    file_name: &Utf8Path,
    display_path: &str,
    contents: &str,
) -> Result<bool, RecordStoreError> {
    let name = bare_name(file_name, display_path)?;
    let tmp_name = temp_name(name);

    write_temp_file(dir, &tmp_name, contents)
        .map_err(|err| RecordStoreError::io(display_path, err.to_string()))?;
    let linked = dir.hard_link(&tmp_name, dir, name);
    drop(dir.remove_file(&tmp_name));
    match linked {
        Ok(()) => {
            sync_directory(dir);
            Ok(true)
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(err) => Err(RecordStoreError::io(display_path, err.to_string())),
    }
}

fn bare_name<'a>(file_name: &'a Utf8Path, display_path: &str) -> Result<&'a str, RecordStoreError> {
    let mut components = file_name.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) => Ok(name),
        _ => Err(RecordStoreError::io(
            display_path,
            "record store path must be a bare file name",
        )),
    }
}

fn temp_name(name: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{name}.tmp.{}.{suffix}.{counter}", std::process::id())
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if written.is_err() {
        drop(file);
        drop(dir.remove_file(tmp_name));
    }
    written
}

fn sync_directory(dir: &Dir) {
    // Best effort: not every platform can fsync a directory handle.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}
