//! Version manifest written next to downloaded assets.
//!
//! Records which GOV.UK Frontend release the assets came from and when:
//!
//! ```text
//! {
//!   "version": "v5.10.2",
//!   "download_date": "2024-05-01",
//!   "files": { "css": [], "js": [], "assets": [] }
//! }
//! ```
//!
//! The `files` lists are always written empty, whatever was copied.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the manifest file within the asset output directory.
pub const MANIFEST_FILENAME: &str = "govuk_frontend_version.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionManifest {
    pub version: String,
    /// Local date of the run, `YYYY-MM-DD`.
    pub download_date: String,
    pub files: ManifestFiles,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFiles {
    pub css: Vec<String>,
    pub js: Vec<String>,
    pub assets: Vec<String>,
}

impl VersionManifest {
    pub fn new(version: &str, download_date: String) -> Self {
        Self {
            version: version.to_string(),
            download_date,
            files: ManifestFiles::default(),
        }
    }

    /// Load a previously written manifest.
    pub fn load(output_dir: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(output_dir.join(MANIFEST_FILENAME))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Write a fresh manifest for `version` into `output_dir`, replacing any
/// existing one. Returns the manifest's absolute path.
pub fn write_manifest(output_dir: &Path, version: &str) -> io::Result<PathBuf> {
    let manifest = VersionManifest::new(version, today());
    let path = output_dir.join(MANIFEST_FILENAME);
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&path, json)?;
    fs::canonicalize(&path)
}
