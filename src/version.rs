//! Release version resolution.
//!
//! Picks the GOV.UK Frontend tag to download: the one the user asked for, or
//! the latest published release, or the configured default. The lookup is
//! best effort. [`resolve_version`] returns a [`ResolvedVersion`], not a
//! `Result`, so a slow or broken release API can only ever cost freshness.

use crate::config::FrontendConfig;
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// How a version was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Passed on the command line.
    Explicit,
    /// `tag_name` of the latest release.
    Latest,
    /// Lookup failed; configured default used.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub tag: String,
    pub source: VersionSource,
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

#[derive(Deserialize)]
struct LatestRelease {
    tag_name: String,
}

#[derive(Error, Debug)]
enum LookupError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("release API returned HTTP {0}")]
    Status(StatusCode),
}

/// Resolve the release tag for this run.
pub fn resolve_version(
    client: &Client,
    explicit: Option<&str>,
    frontend: &FrontendConfig,
) -> ResolvedVersion {
    if let Some(tag) = explicit {
        return ResolvedVersion {
            tag: tag.to_string(),
            source: VersionSource::Explicit,
        };
    }

    match latest_release_tag(client, &frontend.latest_release_url()) {
        Ok(tag) => ResolvedVersion {
            tag,
            source: VersionSource::Latest,
        },
        Err(e) => {
            warn!(
                "Error fetching latest version ({e}); using {}",
                frontend.default_version
            );
            ResolvedVersion {
                tag: frontend.default_version.clone(),
                source: VersionSource::Fallback,
            }
        }
    }
}

fn latest_release_tag(client: &Client, url: &str) -> Result<String, LookupError> {
    let response = client.get(url).send()?;
    let status = response.status();
    debug!("GET {url} -> {status}");
    if status != StatusCode::OK {
        return Err(LookupError::Status(status));
    }
    let release: LatestRelease = response.json()?;
    Ok(release.tag_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::http_client;
    use crate::test_helpers::*;

    #[test]
    fn explicit_version_returned_unchanged() {
        // Unreachable host proves no request is made.
        let frontend = frontend_for(&unreachable_base_url());
        let resolved = resolve_version(&http_client().unwrap(), Some("v4.0.0"), &frontend);
        assert_eq!(resolved.tag, "v4.0.0");
        assert_eq!(resolved.source, VersionSource::Explicit);
    }

    #[test]
    fn latest_tag_from_release_api() {
        let server = CannedServer::start(200, br#"{"tag_name":"v5.11.0","name":"x"}"#.to_vec());
        let frontend = frontend_for(&server.base_url);

        let resolved = resolve_version(&http_client().unwrap(), None, &frontend);

        assert_eq!(resolved.tag, "v5.11.0");
        assert_eq!(resolved.source, VersionSource::Latest);
        assert_eq!(
            server.requests(),
            vec!["/repos/alphagov/govuk-frontend/releases/latest"]
        );
    }

    #[test]
    fn unreachable_api_falls_back_to_default() {
        let frontend = frontend_for(&unreachable_base_url());
        let resolved = resolve_version(&http_client().unwrap(), None, &frontend);
        assert_eq!(resolved.tag, "v5.10.2");
        assert_eq!(resolved.source, VersionSource::Fallback);
    }

    #[test]
    fn non_200_falls_back_to_default() {
        let server = CannedServer::start(403, br#"{"message":"rate limited"}"#.to_vec());
        let frontend = frontend_for(&server.base_url);
        let resolved = resolve_version(&http_client().unwrap(), None, &frontend);
        assert_eq!(resolved.source, VersionSource::Fallback);
        assert_eq!(resolved.tag, frontend.default_version);
    }

    #[test]
    fn malformed_json_falls_back_to_default() {
        let server = CannedServer::start(200, b"<html>not json</html>".to_vec());
        let frontend = frontend_for(&server.base_url);
        let resolved = resolve_version(&http_client().unwrap(), None, &frontend);
        assert_eq!(resolved.source, VersionSource::Fallback);
    }

    #[test]
    fn missing_tag_field_falls_back_to_default() {
        let server = CannedServer::start(200, br#"{"name":"GOV.UK Frontend v5.11.0"}"#.to_vec());
        let frontend = FrontendConfig {
            default_version: "v5.0.0".to_string(),
            ..frontend_for(&server.base_url)
        };
        let resolved = resolve_version(&http_client().unwrap(), None, &frontend);
        assert_eq!(resolved.tag, "v5.0.0");
        assert_eq!(resolved.source, VersionSource::Fallback);
    }

    #[test]
    fn resolved_version_displays_tag() {
        let resolved = ResolvedVersion {
            tag: "v5.10.2".to_string(),
            source: VersionSource::Latest,
        };
        assert_eq!(resolved.to_string(), "v5.10.2");
    }
}
