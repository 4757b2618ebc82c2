//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// One accepted path and the nodes it must split into.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidCase {
	/// Path text as written by a user.
	pub path: String,
	/// Expected decoded nodes.
	pub nodes: Vec<String>,
}

/// Path corpus shared by parser and CLI tests.
#[derive(Debug, Clone, Deserialize)]
pub struct PathCases {
	/// Paths that must split into the listed nodes.
	pub valid: Vec<ValidCase>,
	/// Paths that must be rejected.
	pub invalid: Vec<String>,
}

/// Load `fixtures/path_cases.json`.
pub fn path_cases() -> PathCases {
	let path = fixture_path("path_cases.json");
	let text = fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}
