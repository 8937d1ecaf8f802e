//! The `download-assets` pipeline.
//!
//! ```text
//! resolve version → fetch zip → extract → classify/copy → write manifest
//! ```
//!
//! Download and extraction happen inside a [`tempfile::TempDir`] workspace
//! that is removed when [`download_assets`] returns, whichever way it
//! returns. A failed download stops the run before anything is extracted or
//! copied into the output directory.

use crate::classify::{self, ClassifyError, CopiedAssets};
use crate::config::FrontendConfig;
use crate::extract::{self, ExtractError};
use crate::fetch::{self, FetchError};
use crate::manifest;
use crate::version::{self, ResolvedVersion};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("Copying assets failed: {0}")]
    Classify(#[from] ClassifyError),
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct AssetReport {
    pub version: ResolvedVersion,
    pub output_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub archive_bytes: u64,
    pub copied: CopiedAssets,
}

/// Download GOV.UK Frontend and copy its distributable assets into `output_dir`.
///
/// `version` is used as-is when given; otherwise the latest release is looked
/// up, falling back to `frontend.default_version`.
pub fn download_assets(
    output_dir: &Path,
    version: Option<&str>,
    frontend: &FrontendConfig,
) -> Result<AssetReport, AssetsError> {
    download_assets_in(&std::env::temp_dir(), output_dir, version, frontend)
}

/// [`download_assets`] with the temporary workspace created under `scratch`.
pub fn download_assets_in(
    scratch: &Path,
    output_dir: &Path,
    version: Option<&str>,
    frontend: &FrontendConfig,
) -> Result<AssetReport, AssetsError> {
    fs::create_dir_all(output_dir)?;

    let client = fetch::http_client().map_err(FetchError::from)?;
    let version = version::resolve_version(&client, version, frontend);

    let workspace = tempfile::Builder::new()
        .prefix("govuk-jekyll-")
        .tempdir_in(scratch)?;
    debug!("Workspace {}", workspace.path().display());

    let archive = fetch::fetch_archive(&client, frontend, &version.tag, workspace.path())?;
    let extracted = extract::extract_archive(&archive.path, workspace.path())?;
    let copied = classify::copy_assets(&extracted, output_dir)?;
    let manifest_path = manifest::write_manifest(output_dir, &version.tag)?;

    Ok(AssetReport {
        version,
        output_dir: fs::canonicalize(output_dir)?,
        manifest_path,
        archive_bytes: archive.bytes,
        copied,
    })
}
