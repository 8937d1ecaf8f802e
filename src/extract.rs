//! Zip extraction.
//!
//! GitHub source archives unpack to a single `<repo>-<version>/` directory.
//! [`extract_archive`] unpacks everything and returns that directory.

use log::debug;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::ZipArchive;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Failed to extract GOV.UK Frontend: no top-level directory in {0}")]
    NoTopLevelDirectory(PathBuf),
}

/// Extract `archive` into `target` and return the top-level directory.
///
/// Entries whose names would land outside `target` are skipped. When more
/// than one directory sits at the top level, the first one `read_dir`
/// yields is used; that order is filesystem-dependent.
pub fn extract_archive(archive: &Path, target: &Path) -> Result<PathBuf, ExtractError> {
    println!("Extracting files to {}...", target.display());
    unpack(archive, target)?;

    let top = first_subdirectory(target)?
        .ok_or_else(|| ExtractError::NoTopLevelDirectory(target.to_path_buf()))?;
    println!("Extracted to: {}", top.display());
    Ok(top)
}

fn unpack(archive: &Path, target: &Path) -> Result<(), ExtractError> {
    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(BufReader::new(file))?;
    fs::create_dir_all(target)?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let Some(rel) = entry.enclosed_name() else {
            debug!("Skipping unsafe entry {}", entry.name());
            continue;
        };
        let out_path = target.join(rel);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
    }
    Ok(())
}

fn first_subdirectory(dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    if dirs.len() > 1 {
        debug!(
            "{} top-level directories in {}; using {}",
            dirs.len(),
            dir.display(),
            dirs[0].display()
        );
    }
    Ok(dirs.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn write_archive(tmp: &TempDir, bytes: &[u8]) -> PathBuf {
        let path = tmp.path().join("archive.zip");
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn extracts_release_and_finds_root() {
        let tmp = TempDir::new().unwrap();
        let archive = write_archive(&tmp, &release_zip());
        let target = tmp.path().join("out");

        let root = extract_archive(&archive, &target).unwrap();

        assert_eq!(root, target.join("govuk-frontend-5.10.2"));
        assert_eq!(
            fs::read_to_string(root.join("dist/govuk-frontend-5.10.2.min.css")).unwrap(),
            ".govuk-body{}"
        );
        assert!(root.join("dist/assets/images/favicon.ico").is_file());
    }

    #[test]
    fn root_found_without_directory_entries() {
        // Some zip writers omit explicit directory entries.
        let tmp = TempDir::new().unwrap();
        let archive = write_archive(&tmp, &zip_bytes(&[("pkg-1.0/src/app.min.js", b"js")]));
        let target = tmp.path().join("out");

        let root = extract_archive(&archive, &target).unwrap();
        assert_eq!(root, target.join("pkg-1.0"));
        assert!(root.join("src/app.min.js").is_file());
    }

    #[test]
    fn flat_archive_has_no_top_level_directory() {
        let tmp = TempDir::new().unwrap();
        let archive = write_archive(&tmp, &zip_bytes(&[("readme.md", b"x"), ("a.min.css", b"y")]));
        let target = tmp.path().join("out");

        let err = extract_archive(&archive, &target).unwrap_err();
        assert!(matches!(err, ExtractError::NoTopLevelDirectory(_)));
        // Files were still extracted
        assert!(target.join("a.min.css").is_file());
    }

    #[test]
    fn archive_file_beside_target_is_not_a_directory() {
        // The workspace holds the archive itself; a file must never be picked.
        let tmp = TempDir::new().unwrap();
        let archive = write_archive(&tmp, &zip_bytes(&[("only-file.txt", b"x")]));

        let err = extract_archive(&archive, tmp.path()).unwrap_err();
        assert!(matches!(err, ExtractError::NoTopLevelDirectory(_)));
    }

    #[test]
    fn multiple_top_level_directories_picks_one() {
        let tmp = TempDir::new().unwrap();
        let archive = write_archive(
            &tmp,
            &zip_bytes(&[("first/a.min.css", b"a"), ("second/b.min.css", b"b")]),
        );
        let target = tmp.path().join("out");

        let root = extract_archive(&archive, &target).unwrap();
        assert!(root == target.join("first") || root == target.join("second"));
    }

    #[test]
    fn garbage_is_zip_error() {
        let tmp = TempDir::new().unwrap();
        let archive = write_archive(&tmp, b"this is not a zip file");

        let err = extract_archive(&archive, &tmp.path().join("out")).unwrap_err();
        assert!(matches!(err, ExtractError::Zip(_)));
    }

    #[test]
    fn missing_archive_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = extract_archive(&tmp.path().join("nope.zip"), tmp.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
