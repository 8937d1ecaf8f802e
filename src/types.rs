//! Shared types passed between subcommands through files on disk.
//!
//! `create-site` writes a [`SiteRecord`] at the site root and `sample-pages`
//! reads it back, so the asset mode is an explicit value rather than
//! something inferred from generated template text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the site record file, relative to the site root.
///
/// Leading dot keeps Jekyll from publishing it.
pub const SITE_RECORD_FILENAME: &str = ".govuk-jekyll.json";

/// Where generated templates load GOV.UK Frontend assets from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetMode {
    /// Fixed jsDelivr URLs.
    Cdn,
    /// Files copied under the site's `assets/` directory.
    SelfHosted,
}

impl AssetMode {
    pub fn from_cdn_flag(cdn: bool) -> Self {
        if cdn { Self::Cdn } else { Self::SelfHosted }
    }
}

impl fmt::Display for AssetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cdn => f.write_str("CDN"),
            Self::SelfHosted => f.write_str("self-hosted"),
        }
    }
}

/// Facts about a generated site, persisted at [`SITE_RECORD_FILENAME`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRecord {
    /// `v`-prefixed GOV.UK Frontend version the layout references.
    pub frontend_version: String,
    pub asset_mode: AssetMode,
    /// Creation date, `YYYY-MM-DD`.
    pub created: String,
}

impl SiteRecord {
    pub fn path(site_dir: &Path) -> PathBuf {
        site_dir.join(SITE_RECORD_FILENAME)
    }

    /// Write the record as pretty JSON, replacing any previous one.
    pub fn save(&self, site_dir: &Path) -> io::Result<PathBuf> {
        let path = Self::path(site_dir);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Read the record. Returns `None` if it's missing or unparseable.
    pub fn load(site_dir: &Path) -> Option<Self> {
        let content = fs::read_to_string(Self::path(site_dir)).ok()?;
        serde_json::from_str(&content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn asset_mode_from_cdn_flag() {
        assert_eq!(AssetMode::from_cdn_flag(true), AssetMode::Cdn);
        assert_eq!(AssetMode::from_cdn_flag(false), AssetMode::SelfHosted);
    }

    #[test]
    fn asset_mode_display() {
        assert_eq!(AssetMode::Cdn.to_string(), "CDN");
        assert_eq!(AssetMode::SelfHosted.to_string(), "self-hosted");
    }

    #[test]
    fn asset_mode_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&AssetMode::Cdn).unwrap(), "\"cdn\"");
        assert_eq!(
            serde_json::to_string(&AssetMode::SelfHosted).unwrap(),
            "\"self-hosted\""
        );
    }

    #[test]
    fn site_record_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let record = SiteRecord {
            frontend_version: "v5.10.2".to_string(),
            asset_mode: AssetMode::Cdn,
            created: "2024-05-01".to_string(),
        };
        let path = record.save(tmp.path()).unwrap();
        assert!(path.ends_with(SITE_RECORD_FILENAME));
        assert_eq!(SiteRecord::load(tmp.path()), Some(record));
    }

    #[test]
    fn site_record_missing_is_none() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(SiteRecord::load(tmp.path()), None);
    }

    #[test]
    fn site_record_garbage_is_none() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(SITE_RECORD_FILENAME), "{not json").unwrap();
        assert_eq!(SiteRecord::load(tmp.path()), None);
    }

    #[test]
    fn site_record_unknown_mode_is_none() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(SITE_RECORD_FILENAME),
            r#"{"frontend_version":"v5.10.2","asset_mode":"ftp","created":"2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(SiteRecord::load(tmp.path()), None);
    }
}
