//! Asset classification and copying.
//!
//! Walks an extracted release and copies the distributable, production-ready
//! files into one flat directory per [`AssetCategory`]:
//!
//! ```text
//! assets/
//! ├── css/      *.min.css
//! ├── js/       *.min.js
//! ├── fonts/    *.woff, *.woff2
//! └── images/   *.png, *.svg, *.ico
//! ```
//!
//! Everything else (unminified sources, source maps, Sass, docs) is ignored.
//! Only the basename survives the copy, so two files with the same name in
//! different source directories collide and the one visited last wins.

use log::debug;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// One of the four output categories, decided purely by file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Css,
    Js,
    Fonts,
    Images,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 4] = [Self::Css, Self::Js, Self::Fonts, Self::Images];

    /// Output subdirectory name.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
            Self::Fonts => "fonts",
            Self::Images => "images",
        }
    }

    /// Human label used in progress and summary lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS",
            Self::Js => "JavaScript",
            Self::Fonts => "Font",
            Self::Images => "Image",
        }
    }

    fn suffixes(self) -> &'static [&'static str] {
        match self {
            Self::Css => &[".min.css"],
            Self::Js => &[".min.js"],
            Self::Fonts => &[".woff", ".woff2"],
            Self::Images => &[".png", ".svg", ".ico"],
        }
    }

    /// Category for a file name, or `None` if it isn't a distributable asset.
    ///
    /// Matching is case-sensitive, like the release's own file names.
    pub fn classify(file_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.suffixes().iter().any(|s| file_name.ends_with(*s)))
    }
}

/// Destination paths written per category, in traversal order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopiedAssets {
    pub css: Vec<PathBuf>,
    pub js: Vec<PathBuf>,
    pub fonts: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
}

impl CopiedAssets {
    pub fn get(&self, category: AssetCategory) -> &[PathBuf] {
        match category {
            AssetCategory::Css => &self.css,
            AssetCategory::Js => &self.js,
            AssetCategory::Fonts => &self.fonts,
            AssetCategory::Images => &self.images,
        }
    }

    fn push(&mut self, category: AssetCategory, path: PathBuf) {
        match category {
            AssetCategory::Css => self.css.push(path),
            AssetCategory::Js => self.js.push(path),
            AssetCategory::Fonts => self.fonts.push(path),
            AssetCategory::Images => self.images.push(path),
        }
    }

    pub fn total(&self) -> usize {
        AssetCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// Copy every classified file under `extracted_root` into `output_dir`.
///
/// Category directories are created if absent. Each file is visited once;
/// directory entries are traversed in file-name order so reruns over the
/// same tree resolve basename collisions the same way.
pub fn copy_assets(extracted_root: &Path, output_dir: &Path) -> Result<CopiedAssets, ClassifyError> {
    for category in AssetCategory::ALL {
        fs::create_dir_all(output_dir.join(category.dir_name()))?;
    }

    let mut copied = CopiedAssets::default();
    for entry in WalkDir::new(extracted_root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        let Some(category) = AssetCategory::classify(&file_name) else {
            continue;
        };

        let dest = output_dir.join(category.dir_name()).join(entry.file_name());
        copy_preserving_mtime(entry.path(), &dest)?;
        debug!("Copied {}: {}", category.label(), file_name);
        copied.push(category, dest);
    }
    Ok(copied)
}

/// `fs::copy` plus the source's modification time.
fn copy_preserving_mtime(src: &Path, dest: &Path) -> io::Result<()> {
    fs::copy(src, dest)?;
    let modified = fs::metadata(src)?.modified()?;
    File::options().write(true).open(dest)?.set_modified(modified)
}
