//! Release archive download.
//!
//! Streams the zip for a release tag into the run's temporary workspace
//! through a fixed-size buffer, so peak memory doesn't depend on archive size.

use crate::config::FrontendConfig;
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the downloaded archive inside the workspace.
pub const ARCHIVE_FILENAME: &str = "govuk-frontend.zip";

const CHUNK_SIZE: usize = 8192;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to download GOV.UK Frontend: HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A downloaded archive on disk.
#[derive(Debug)]
pub struct FetchedArchive {
    pub url: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Build the HTTP client shared by version lookup and archive download.
///
/// GitHub's API rejects requests without a `User-Agent`.
pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("govuk-jekyll/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Download the archive for `version` into `workspace`.
///
/// Fails with [`FetchError::Status`] on anything but `200 OK`. A partially
/// written file is left for the workspace teardown to remove.
pub fn fetch_archive(
    client: &Client,
    frontend: &FrontendConfig,
    version: &str,
    workspace: &Path,
) -> Result<FetchedArchive, FetchError> {
    let url = frontend.archive_url(version);
    println!("Downloading GOV.UK Frontend {version} from {url}...");

    let mut response = client.get(&url).send()?;
    let status = response.status();
    debug!("GET {url} -> {status}");
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url,
        });
    }

    let path = workspace.join(ARCHIVE_FILENAME);
    let mut file = File::create(&path)?;
    let mut buf = [0u8; CHUNK_SIZE];
    let mut bytes = 0u64;
    loop {
        let n = response.read(&mut buf)?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])?;
        bytes += n as u64;
    }
    file.flush()?;

    println!("Download complete: {}", path.display());
    Ok(FetchedArchive { url, path, bytes })
}
