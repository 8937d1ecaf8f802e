//! Tool configuration module.
//!
//! Handles loading, validating, and merging `govuk-jekyll.toml`. Stock
//! defaults point at the official GOV.UK Frontend release on GitHub and the
//! jsDelivr CDN; a user config file only needs the values it overrides.
//!
//! ## Config File Location
//!
//! The file is looked up at `govuk-jekyll.toml` in the working directory, or
//! wherever `--config` points. A missing file is not an error.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [frontend]
//! repository = "alphagov/govuk-frontend"  # GitHub owner/name
//! default_version = "v5.10.2"             # Used when the latest release can't be looked up
//! site_version = "5.10.2"                 # Version referenced by generated layouts
//! api_base = "https://api.github.com"     # Release-listing API
//! download_base = "https://github.com"    # Archive downloads
//! cdn_base = "https://cdn.jsdelivr.net/npm"
//!
//! [site]
//! name = "GOV.UK Frontend Jekyll Site"
//! email = "your-email@example.com"
//! description = "A Jekyll site using the GOV.UK Frontend design system."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file name, relative to the working directory.
pub const CONFIG_FILENAME: &str = "govuk-jekyll.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `govuk-jekyll.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Where GOV.UK Frontend releases and CDN files come from.
    pub frontend: FrontendConfig,
    /// Defaults written into the generated Jekyll site.
    pub site: SiteDefaults,
}

impl ToolConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let repo = &self.frontend.repository;
        match repo.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "frontend.repository must be owner/name, got {repo:?}"
                )));
            }
        }
        for (key, url) in [
            ("frontend.api_base", &self.frontend.api_base),
            ("frontend.download_base", &self.frontend.download_base),
            ("frontend.cdn_base", &self.frontend.cdn_base),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be an http(s) URL"
                )));
            }
        }
        if self.frontend.default_version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "frontend.default_version must not be empty".into(),
            ));
        }
        if self.frontend.site_version.is_empty() || self.frontend.site_version.starts_with('v') {
            return Err(ConfigError::Validation(
                "frontend.site_version must be a bare version like 5.10.2".into(),
            ));
        }
        Ok(())
    }
}

/// Release source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrontendConfig {
    /// GitHub repository in `owner/name` form.
    pub repository: String,
    /// Tag used when the latest release can't be looked up.
    pub default_version: String,
    /// Bare version (no `v`) referenced by generated layouts and CDN URLs.
    pub site_version: String,
    /// Base URL of the release-listing API.
    pub api_base: String,
    /// Base URL archives are downloaded from.
    pub download_base: String,
    /// Base URL of the npm CDN.
    pub cdn_base: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            repository: "alphagov/govuk-frontend".to_string(),
            default_version: "v5.10.2".to_string(),
            site_version: "5.10.2".to_string(),
            api_base: "https://api.github.com".to_string(),
            download_base: "https://github.com".to_string(),
            cdn_base: "https://cdn.jsdelivr.net/npm".to_string(),
        }
    }
}

impl FrontendConfig {
    /// URL of the "latest release" listing for the repository.
    pub fn latest_release_url(&self) -> String {
        format!(
            "{}/repos/{}/releases/latest",
            self.api_base.trim_end_matches('/'),
            self.repository
        )
    }

    /// Deterministic archive URL for a release tag.
    pub fn archive_url(&self, version: &str) -> String {
        format!(
            "{}/{}/archive/{}.zip",
            self.download_base.trim_end_matches('/'),
            self.repository,
            version
        )
    }

    /// CDN root for the pinned site version, e.g.
    /// `https://cdn.jsdelivr.net/npm/govuk-frontend@5.10.2`.
    pub fn cdn_root(&self) -> String {
        let package = self
            .repository
            .rsplit('/')
            .next()
            .unwrap_or(&self.repository);
        format!(
            "{}/{}@{}",
            self.cdn_base.trim_end_matches('/'),
            package,
            self.site_version
        )
    }

    /// The `v`-prefixed tag matching `site_version`.
    pub fn site_tag(&self) -> String {
        format!("v{}", self.site_version)
    }
}

/// Values written into `_config.yml` and friends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteDefaults {
    /// Site title, overridable with `--site-name`.
    pub name: String,
    /// Contact email placed in `_config.yml`.
    pub email: String,
    /// One-line site description.
    pub description: String,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            name: "GOV.UK Frontend Jekyll Site".to_string(),
            email: "your-email@example.com".to_string(),
            description: "A Jekyll site using the GOV.UK Frontend design system.".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ToolConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ToolConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ToolConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given file, on top of stock defaults.
pub fn load_config(path: &Path) -> Result<ToolConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `govuk-jekyll.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# govuk-jekyll Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# GOV.UK Frontend release source
# ---------------------------------------------------------------------------
[frontend]
# GitHub repository releases are fetched from (owner/name).
repository = "alphagov/govuk-frontend"

# Release tag used by download-assets when no --version is given and the
# latest release can't be looked up.
default_version = "v5.10.2"

# Version referenced by generated layouts and CDN URLs (no leading "v").
# create-site downloads this exact release in self-hosted mode.
site_version = "5.10.2"

# Release-listing API, archive host and npm CDN.
api_base = "https://api.github.com"
download_base = "https://github.com"
cdn_base = "https://cdn.jsdelivr.net/npm"

# ---------------------------------------------------------------------------
# Generated site defaults
# ---------------------------------------------------------------------------
[site]
# Site title (create-site --site-name overrides it).
name = "GOV.UK Frontend Jekyll Site"
email = "your-email@example.com"
description = "A Jekyll site using the GOV.UK Frontend design system."
"##
}
