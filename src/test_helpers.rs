//! Shared test utilities for the govuk-jekyll test suite.
//!
//! Provides a canned-response HTTP server on loopback, an address that
//! refuses connections, and builders for zip archives and extracted trees.
//!
//! # Usage
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let server = CannedServer::start(200, zip_bytes(&[("govuk-frontend-5.10.2/a.min.css", b"a")]));
//! let frontend = frontend_for(&server.base_url);
//! // ... exercise code that talks to `frontend.archive_url(..)`
//! assert_eq!(server.requests(), vec!["/alphagov/govuk-frontend/archive/v5.10.2.zip"]);
//! ```

use std::io::{Cursor, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;
use zip::write::SimpleFileOptions;

use crate::config::FrontendConfig;

// =========================================================================
// HTTP fixtures
// =========================================================================

/// Serves the same response to every connection until the test exits.
pub struct CannedServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    pub fn start(status: u16, body: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                // Logged before responding so the client never sees a reply
                // that `requests()` doesn't know about yet.
                if let Some(path) = read_request_path(&mut stream) {
                    log.lock().unwrap().push(path);
                    respond(stream, status, &body);
                }
            }
        });

        Self { base_url, requests }
    }

    /// Request paths received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request_path(stream: &mut TcpStream) -> Option<String> {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        if stream.read(&mut byte).ok()? == 0 {
            return None;
        }
        head.push(byte[0]);
    }
    let head = String::from_utf8_lossy(&head);
    Some(head.split_whitespace().nth(1).unwrap_or("").to_string())
}

fn respond(mut stream: TcpStream, status: u16, body: &[u8]) {
    let reason = match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        _ => "Internal Server Error",
    };
    let header = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

/// A loopback URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Stock frontend config with both API and download hosts pointed at `base_url`.
pub fn frontend_for(base_url: &str) -> FrontendConfig {
    FrontendConfig {
        api_base: base_url.to_string(),
        download_base: base_url.to_string(),
        ..FrontendConfig::default()
    }
}

// =========================================================================
// Archive fixtures
// =========================================================================

/// Build an in-memory zip. Names ending in `/` become directory entries.
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// A small release-shaped archive under a single `govuk-frontend-5.10.2/` root.
pub fn release_zip() -> Vec<u8> {
    zip_bytes(&[
        ("govuk-frontend-5.10.2/", b""),
        (
            "govuk-frontend-5.10.2/dist/govuk-frontend-5.10.2.min.css",
            b".govuk-body{}",
        ),
        (
            "govuk-frontend-5.10.2/dist/govuk-frontend-5.10.2.min.js",
            b"window.GOVUKFrontend={}",
        ),
        (
            "govuk-frontend-5.10.2/dist/assets/fonts/bold-b542beb274-v2.woff2",
            b"woff2",
        ),
        (
            "govuk-frontend-5.10.2/dist/assets/images/favicon.ico",
            b"ico",
        ),
        ("govuk-frontend-5.10.2/package/govuk/all.scss", b"@import"),
        ("govuk-frontend-5.10.2/README.md", b"# GOV.UK Frontend"),
    ])
}

/// Write `files` (relative path, content) under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }
}

/// File names directly inside `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
