//! Test fixture loader for the authority-signal engine.
//!
//! Fixtures live under `crates/test-fixtures/corpus/`: a canonical content
//! snapshot and its hand-authored binding list.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Canonical content snapshot (claims, records, case studies, books, frameworks).
pub const CONTENT: &str = "corpus/content.json";

/// Canonical binding list for [`CONTENT`].
pub const BINDINGS: &str = "corpus/bindings.json";

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    loop {
        let candidate = path.join("crates").join("test-fixtures");
        if candidate.exists() {
            return candidate;
        }
        let sibling = path.join("test-fixtures");
        if sibling.join("corpus").exists() {
            return sibling;
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}
