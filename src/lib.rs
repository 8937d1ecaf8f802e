//! # govuk-jekyll
//!
//! Scaffolds [Jekyll](https://jekyllrb.com/) sites styled with the
//! [GOV.UK Frontend](https://frontend.design-system.service.gov.uk/) design
//! system, and keeps a local copy of the Frontend's distributable assets.
//!
//! # Commands
//!
//! Three commands, usually run in order, each usable on its own:
//!
//! ```text
//! 1. download-assets  release zip  →  assets/{css,js,fonts,images} + version manifest
//! 2. create-site      options      →  Jekyll skeleton, layout, config, site record
//! 3. sample-pages     site dir     →  start, question and components pages
//! ```
//!
//! `create-site` in self-hosted mode runs `download-assets` as a child
//! process of the same executable. `sample-pages` learns how the site was
//! created from the site record `create-site` leaves behind
//! ([`types::SiteRecord`]).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`assets`] | The `download-assets` pipeline: version → fetch → extract → copy → manifest |
//! | [`version`] | Best-effort lookup of the latest release tag, with a configured fallback |
//! | [`fetch`] | Streams the release zip into a temporary workspace |
//! | [`extract`] | Unpacks the zip and finds its top-level directory |
//! | [`classify`] | Sorts distributable files into css/js/fonts/images and copies them |
//! | [`manifest`] | Writes `govuk_frontend_version.json` |
//! | [`scaffold`] | The `create-site` command and the asset-fetch subprocess seam |
//! | [`templates`] | Layout, index page and static file contents, built with Maud |
//! | [`pages`] | The `sample-pages` command |
//! | [`config`] | Optional `govuk-jekyll.toml` loading, merging and validation |
//! | [`types`] | Asset mode and the site record shared between commands |
//! | [`output`] | CLI summary formatting |
//!
//! # Design Decisions
//!
//! ## Best-Effort Version Lookup
//!
//! Asking the release API for the latest tag is a convenience. Any failure
//! (no network, rate limit, unexpected JSON) falls back to
//! `frontend.default_version` with a warning. [`version::resolve_version`]
//! has no error type, so callers can't accidentally abort on it.
//!
//! ## Scoped Workspace
//!
//! The zip is downloaded and unpacked inside a [`tempfile::TempDir`]. The
//! directory is removed when the pipeline returns, on success or failure,
//! so interrupted runs don't accumulate in the system temp directory.
//!
//! ## Explicit Asset Mode
//!
//! Whether a site loads Frontend files from its own `assets/` directory or
//! from jsDelivr is recorded in `.govuk-jekyll.json` as
//! [`types::AssetMode`]. Nothing inspects generated HTML to work it out.
//!
//! ## Maud for Markup
//!
//! The layout and sample pages are Maud templates. Liquid tags are passed
//! through unescaped with [`templates::liquid`] so Jekyll still sees them.

pub mod assets;
pub mod classify;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod manifest;
pub mod output;
pub mod pages;
pub mod scaffold;
pub mod templates;
pub mod types;
pub mod version;

#[cfg(test)]
pub(crate) mod test_helpers;
