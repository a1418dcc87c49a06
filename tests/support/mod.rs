//! Shared test utilities.

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde_json::{Value, json};
use tempfile::TempDir;

pub mod runtime;

/// Creates a temporary directory for event payload files.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Builds a minimal webhook payload for pull request `number` in `owner/repo`.
pub fn event_payload(action: &str, number: u64) -> Value {
    json!({
        "action": action,
        "number": number,
        "pull_request": { "number": number, "title": "Add widgets" },
        "repository": { "name": "repo", "owner": { "login": "owner" } }
    })
}

/// Writes `payload` to `event.json` inside `temp_dir` and returns its path.
///
/// # Panics
///
/// Panics if the directory is not UTF-8 or the file cannot be written.
pub fn write_event_payload(temp_dir: &TempDir, payload: &Value) -> Utf8PathBuf {
    let base = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("temporary directory is not UTF-8: {}", path.display()));
    let dir = Dir::open_ambient_dir(&base, ambient_authority())
        .unwrap_or_else(|error| panic!("failed to open temporary directory: {error}"));
    dir.write("event.json", payload.to_string())
        .unwrap_or_else(|error| panic!("failed to write event payload: {error}"));
    base.join("event.json")
}
