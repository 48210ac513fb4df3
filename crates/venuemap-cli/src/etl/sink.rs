//! JSON sink writer: the pipeline's sole durable output.

use std::fs;
use std::path::Path;

use thiserror::Error;

use venuemap_core::Place;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to serialize places: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Serializes `places` as pretty-printed JSON and overwrites `path`.
///
/// Parent directories are created as needed. The file is written exactly
/// once per run, after the full pass completes — there is no incremental
/// output.
///
/// # Errors
///
/// Returns [`SinkError`] on serialization or filesystem failure. Callers
/// escalate this to a non-zero process exit: downstream consumers rely on
/// the artifact's presence.
pub fn write_places(places: &[Place], path: &Path) -> Result<(), SinkError> {
    let json = serde_json::to_string_pretty(places)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SinkError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }

    fs::write(path, json).map_err(|e| SinkError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
