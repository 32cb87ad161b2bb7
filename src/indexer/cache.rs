// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cache document: the flat JSON list of every indexed function.

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::{Error, Result};
use crate::models::FunctionRecord;

/// Default cache location, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = "functions.json";

pub fn cache_exists(path: &Path) -> bool {
    path.is_file()
}

pub fn read_cache(path: &Path) -> Result<Vec<FunctionRecord>> {
    let content = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    serde_json::from_str(&content).map_err(|source| Error::Cache {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `functions` as a pretty-printed document (4-space indent).
pub fn write_cache(path: &Path, functions: &[FunctionRecord]) -> Result<()> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    functions
        .serialize(&mut serializer)
        .map_err(|source| Error::Cache {
            path: path.to_path_buf(),
            source,
        })?;
    bytes.push(b'\n');
    atomic_write_bytes(path, &bytes)
}

/// Remove the cache document. Returns whether one existed.
pub fn remove_cache(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(Error::io(path, err)),
    }
}

pub(crate) fn atomic_write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;

    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or(0);
    let tmp_name = format!(
        ".{}.tmp-{}-{}",
        path.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("fnfind"),
        std::process::id(),
        nonce
    );
    let tmp_path = parent.join(tmp_name);

    write_temp_file(&tmp_path, |file| {
        file.write_all(bytes)?;
        file.sync_all()
    })?;

    if let Err(err) = std::fs::rename(&tmp_path, path) {
        if path.exists() {
            let _ = std::fs::remove_file(path);
            std::fs::rename(&tmp_path, path).map_err(|err| Error::io(path, err))?;
        } else {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(Error::io(path, err));
        }
    }

    Ok(())
}

/// Create `tmp_path` and fill it; a failed write removes the partial file.
fn write_temp_file(
    tmp_path: &Path,
    write: impl FnOnce(&mut File) -> std::io::Result<()>,
) -> Result<()> {
    let mut file = File::create(tmp_path).map_err(|err| Error::io(tmp_path, err))?;
    if let Err(err) = write(&mut file) {
        drop(file);
        let _ = std::fs::remove_file(tmp_path);
        return Err(Error::io(tmp_path, err));
    }
    Ok(())
}
