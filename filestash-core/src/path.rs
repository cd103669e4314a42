//! Object key path helpers
//!
//! Object keys are `/`-delimited strings. The final segment is the file
//! name, everything before it is the logical directory prefix.

use crate::error::{StorageError, StorageResult};

/// Extract the file name from an object key.
///
/// The name is the substring after the last `/`; a key without any `/` is
/// its own file name. Fails when the final segment is empty (an empty key
/// or a key ending in `/`).
pub fn file_name(path: &str) -> StorageResult<&str> {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(StorageError::InvalidPath(path.to_string())),
    }
}

/// Split an object key into directory prefix and file name.
///
/// The prefix keeps its internal separators but not the trailing one:
/// `"docs/guides/intro.md"` splits into `("docs/guides", "intro.md")`. A
/// bare file name splits into an empty prefix.
pub fn split(path: &str) -> StorageResult<(&str, &str)> {
    let name = file_name(path)?;
    let prefix = &path[..path.len() - name.len()];
    Ok((prefix.strip_suffix('/').unwrap_or(prefix), name))
}

/// Join a directory prefix and a file name into an object key.
///
/// An empty prefix yields the bare file name.
pub fn join(prefix: &str, name: &str) -> String {
    let prefix = prefix.strip_suffix('/').unwrap_or(prefix);
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}
