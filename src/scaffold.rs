//! Jekyll site scaffolding for the `create-site` command.
//!
//! Produces a site ready for `bundle exec jekyll serve`:
//!
//! ```text
//! site/
//! ├── _config.yml
//! ├── Gemfile
//! ├── README.md
//! ├── index.md
//! ├── .govuk-jekyll.json        # site record, read by sample-pages
//! ├── _includes/
//! ├── _layouts/govuk-default.html
//! └── assets/
//!     ├── css/custom.css
//!     ├── js/  images/  fonts/  # filled by download-assets when self-hosted
//! ```
//!
//! In self-hosted mode the assets are fetched by running this executable's
//! own `download-assets` command in a child process. Download failures are
//! reported back as [`AssetFetch::Failed`] and never abort scaffolding.

use crate::config::ToolConfig;
use crate::manifest;
use crate::templates::{self, AssetUrls};
use crate::types::{AssetMode, SiteRecord};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Directories created under the site root, parents first.
pub const SITE_DIRS: [&str; 7] = [
    "_layouts",
    "_includes",
    "assets",
    "assets/css",
    "assets/js",
    "assets/images",
    "assets/fonts",
];

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// What to scaffold.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub output_dir: PathBuf,
    pub site_name: String,
    pub mode: AssetMode,
}

/// Result of the self-hosted asset download step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetFetch {
    /// CDN mode; nothing to download.
    Skipped,
    Fetched,
    /// Download did not succeed; the site is still usable once assets are
    /// fetched by hand.
    Failed(String),
}

/// Fills a site's `assets/` directory with a given GOV.UK Frontend release.
pub trait AssetFetcher {
    fn fetch(&self, assets_dir: &Path, version_tag: &str) -> AssetFetch;
}

/// Runs `<exe> [--config PATH] download-assets <assets_dir> --version <tag>`.
#[derive(Debug, Clone)]
pub struct SubprocessFetcher {
    pub exe: PathBuf,
    pub config_path: Option<PathBuf>,
}

impl SubprocessFetcher {
    /// Fetcher that re-invokes the running executable.
    pub fn current(config_path: Option<&Path>) -> io::Result<Self> {
        Ok(Self {
            exe: std::env::current_exe()?,
            config_path: config_path.map(Path::to_path_buf),
        })
    }

    fn command(&self, assets_dir: &Path, version_tag: &str) -> Command {
        let mut cmd = Command::new(&self.exe);
        if let Some(path) = &self.config_path {
            cmd.arg("--config").arg(path);
        }
        cmd.arg("download-assets")
            .arg(assets_dir)
            .arg("--version")
            .arg(version_tag);
        cmd
    }
}

impl AssetFetcher for SubprocessFetcher {
    fn fetch(&self, assets_dir: &Path, version_tag: &str) -> AssetFetch {
        let mut cmd = self.command(assets_dir, version_tag);
        debug!("Running {:?}", cmd);
        match cmd.status() {
            Ok(status) if status.success() => AssetFetch::Fetched,
            Ok(status) => AssetFetch::Failed(format!("download-assets exited with {status}")),
            Err(e) => AssetFetch::Failed(format!("could not run {}: {e}", self.exe.display())),
        }
    }
}

/// Outcome of [`create_site`].
#[derive(Debug)]
pub struct ScaffoldReport {
    pub site_dir: PathBuf,
    pub site_name: String,
    pub mode: AssetMode,
    /// `v`-prefixed version the layout references.
    pub frontend_version: String,
    pub assets: AssetFetch,
    /// Files written, relative to `site_dir`, in write order.
    pub files: Vec<PathBuf>,
}

/// Scaffold a site, fetching self-hosted assets through a child process.
pub fn create_site(
    options: &SiteOptions,
    config: &ToolConfig,
    config_path: Option<&Path>,
) -> Result<ScaffoldReport, ScaffoldError> {
    let fetcher = SubprocessFetcher::current(config_path)?;
    create_site_with_fetcher(options, config, &fetcher)
}

/// [`create_site`] with an explicit asset fetcher.
pub fn create_site_with_fetcher(
    options: &SiteOptions,
    config: &ToolConfig,
    fetcher: &dyn AssetFetcher,
) -> Result<ScaffoldReport, ScaffoldError> {
    let site_dir = &options.output_dir;
    let frontend = &config.frontend;
    let version_tag = frontend.site_tag();

    println!("Creating Jekyll directory structure in {}...", site_dir.display());
    fs::create_dir_all(site_dir)?;
    for dir in SITE_DIRS {
        fs::create_dir_all(site_dir.join(dir))?;
    }

    let assets = match options.mode {
        AssetMode::Cdn => AssetFetch::Skipped,
        AssetMode::SelfHosted => {
            println!("Downloading GOV.UK Frontend assets for self-hosting...");
            let outcome = fetcher.fetch(&site_dir.join("assets"), &version_tag);
            if let AssetFetch::Failed(reason) = &outcome {
                warn!("Asset download failed: {reason}");
            }
            outcome
        }
    };

    let created = manifest::today();
    let urls = AssetUrls::for_mode(options.mode, frontend);
    let files: [(&str, String); 6] = [
        (
            "_config.yml",
            templates::config_yml(&options.site_name, &config.site),
        ),
        ("Gemfile", templates::GEMFILE.to_string()),
        ("assets/css/custom.css", templates::CUSTOM_CSS.to_string()),
        (
            "_layouts/govuk-default.html",
            templates::default_layout(&urls),
        ),
        ("index.md", templates::index_page()),
        (
            "README.md",
            templates::readme(&version_tag, options.mode, &created),
        ),
    ];

    let mut written = Vec::with_capacity(files.len() + 1);
    for (rel, content) in files {
        fs::write(site_dir.join(rel), content)?;
        println!("Created {rel}");
        written.push(PathBuf::from(rel));
    }

    let record = SiteRecord {
        frontend_version: version_tag.clone(),
        asset_mode: options.mode,
        created,
    };
    let record_path = record.save(site_dir)?;
    debug!("Wrote site record {}", record_path.display());
    written.push(PathBuf::from(crate::types::SITE_RECORD_FILENAME));

    Ok(ScaffoldReport {
        site_dir: site_dir.clone(),
        site_name: options.site_name.clone(),
        mode: options.mode,
        frontend_version: version_tag,
        assets,
        files: written,
    })
}
