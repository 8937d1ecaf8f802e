//! CLI output formatting for the three commands.
//!
//! Each command has a `format_*` function returning lines, so the wording can
//! be tested without capturing stdout, and a `print_*` wrapper. Progress lines
//! printed while work is in flight (`Downloading ...`, `Created ...`) come
//! from the modules doing the work; this module renders the final summary.
//!
//! # Output Format
//!
//! ## download-assets
//!
//! ```text
//! Asset download and extraction complete!
//! Version: v5.10.2 (latest release)
//! Assets saved to: /abs/site/assets
//! Version information saved to: /abs/site/assets/govuk_frontend_version.json
//!
//! Summary of copied files:
//! CSS files: 1
//!     govuk-frontend-5.10.2.min.css
//! JavaScript files: 1
//!     govuk-frontend-5.10.2.min.js
//! Font files: 0
//! Image files: 0
//! ```
//!
//! ## create-site
//!
//! ```text
//! Jekyll structure with GOV.UK Frontend v5.10.2 (CDN mode) has been created in site
//! To start the Jekyll server, run:
//!     cd site
//!     bundle install --path vendor/bundle
//!     bundle exec jekyll serve
//!
//! You can now run `govuk-jekyll sample-pages site` to create sample pages.
//! ```

use crate::assets::AssetReport;
use crate::classify::AssetCategory;
use crate::pages::PagesReport;
use crate::scaffold::{AssetFetch, ScaffoldReport};
use crate::version::VersionSource;
use std::path::Path;

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn serve_instructions(site_dir: &Path) -> Vec<String> {
    vec![
        "To start the Jekyll server, run:".to_string(),
        format!("{}cd {}", indent(1), site_dir.display()),
        format!("{}bundle install --path vendor/bundle", indent(1)),
        format!("{}bundle exec jekyll serve", indent(1)),
    ]
}

// ============================================================================
// download-assets
// ============================================================================

fn source_note(source: VersionSource) -> &'static str {
    match source {
        VersionSource::Explicit => "requested",
        VersionSource::Latest => "latest release",
        VersionSource::Fallback => "default, latest release unavailable",
    }
}

pub fn format_assets_output(report: &AssetReport) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Asset download and extraction complete!".to_string(),
        format!(
            "Version: {} ({})",
            report.version.tag,
            source_note(report.version.source)
        ),
        format!("Assets saved to: {}", report.output_dir.display()),
        format!(
            "Version information saved to: {}",
            report.manifest_path.display()
        ),
        String::new(),
        "Summary of copied files:".to_string(),
    ];

    for category in AssetCategory::ALL {
        let copied = report.copied.get(category);
        lines.push(format!("{} files: {}", category.label(), copied.len()));
        for path in copied {
            lines.push(format!("{}{}", indent(1), file_name(path)));
        }
    }
    lines
}

pub fn print_assets_output(report: &AssetReport) {
    for line in format_assets_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// create-site
// ============================================================================

pub fn format_scaffold_output(report: &ScaffoldReport) -> Vec<String> {
    let mut lines = Vec::new();

    if let AssetFetch::Failed(reason) = &report.assets {
        lines.push(format!("Warning: Failed to download assets: {reason}"));
        lines.push("Download them manually with:".to_string());
        lines.push(format!(
            "{}govuk-jekyll download-assets {} --version {}",
            indent(1),
            report.site_dir.join("assets").display(),
            report.frontend_version
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Jekyll structure with GOV.UK Frontend {} ({} mode) has been created in {}",
        report.frontend_version,
        report.mode,
        report.site_dir.display()
    ));
    lines.extend(serve_instructions(&report.site_dir));
    lines.push(String::new());
    lines.push(format!(
        "You can now run `govuk-jekyll sample-pages {}` to create sample pages.",
        report.site_dir.display()
    ));
    lines
}

pub fn print_scaffold_output(report: &ScaffoldReport) {
    for line in format_scaffold_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// sample-pages
// ============================================================================

pub fn format_pages_output(report: &PagesReport) -> Vec<String> {
    let mode = report
        .asset_mode
        .map(|m| m.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let mut lines = vec![
        String::new(),
        format!(
            "Sample pages have been created in {}",
            report.site_dir.display()
        ),
        format!("Asset mode detected: {mode}"),
    ];
    lines.extend(serve_instructions(&report.site_dir));
    lines.push(String::new());
    lines.push("Your GOV.UK Frontend Jekyll site is now ready to use!".to_string());
    lines
}

pub fn print_pages_output(report: &PagesReport) {
    for line in format_pages_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::CopiedAssets;
    use crate::types::AssetMode;
    use crate::version::ResolvedVersion;
    use std::path::PathBuf;

    fn asset_report(source: VersionSource) -> AssetReport {
        AssetReport {
            version: ResolvedVersion {
                tag: "v5.10.2".to_string(),
                source,
            },
            output_dir: PathBuf::from("/site/assets"),
            manifest_path: PathBuf::from("/site/assets/govuk_frontend_version.json"),
            archive_bytes: 1024,
            copied: CopiedAssets {
                css: vec![PathBuf::from("/site/assets/css/govuk-frontend-5.10.2.min.css")],
                js: vec![],
                fonts: vec![
                    PathBuf::from("/site/assets/fonts/bold.woff2"),
                    PathBuf::from("/site/assets/fonts/light.woff2"),
                ],
                images: vec![],
            },
        }
    }

    fn scaffold_report(assets: AssetFetch) -> ScaffoldReport {
        ScaffoldReport {
            site_dir: PathBuf::from("my-site"),
            site_name: "Test".to_string(),
            mode: AssetMode::SelfHosted,
            frontend_version: "v5.10.2".to_string(),
            assets,
            files: vec![],
        }
    }

    // =========================================================================
    // download-assets
    // =========================================================================

    #[test]
    fn assets_summary_counts_each_category() {
        let lines = format_assets_output(&asset_report(VersionSource::Explicit));
        let summary = lines
            .iter()
            .position(|l| l == "Summary of copied files:")
            .unwrap();
        assert_eq!(
            lines[summary + 1..],
            [
                "CSS files: 1",
                "    govuk-frontend-5.10.2.min.css",
                "JavaScript files: 0",
                "Font files: 2",
                "    bold.woff2",
                "    light.woff2",
                "Image files: 0",
            ]
        );
    }

    #[test]
    fn assets_summary_shows_paths() {
        let lines = format_assets_output(&asset_report(VersionSource::Explicit));
        assert!(lines.contains(&"Assets saved to: /site/assets".to_string()));
        assert!(lines.contains(
            &"Version information saved to: /site/assets/govuk_frontend_version.json".to_string()
        ));
    }

    #[test]
    fn assets_summary_notes_version_source() {
        let lines = format_assets_output(&asset_report(VersionSource::Fallback));
        assert!(lines.contains(
            &"Version: v5.10.2 (default, latest release unavailable)".to_string()
        ));
        let lines = format_assets_output(&asset_report(VersionSource::Latest));
        assert!(lines.contains(&"Version: v5.10.2 (latest release)".to_string()));
    }

    // =========================================================================
    // create-site
    // =========================================================================

    #[test]
    fn scaffold_summary_has_next_steps() {
        let lines = format_scaffold_output(&scaffold_report(AssetFetch::Fetched));
        assert!(lines.contains(
            &"Jekyll structure with GOV.UK Frontend v5.10.2 (self-hosted mode) has been created in my-site"
                .to_string()
        ));
        assert!(lines.contains(&"    cd my-site".to_string()));
        assert!(lines.contains(&"    bundle exec jekyll serve".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Warning")));
    }

    #[test]
    fn scaffold_summary_warns_on_failed_download() {
        let lines = format_scaffold_output(&scaffold_report(AssetFetch::Failed(
            "exit status: 1".to_string(),
        )));
        assert_eq!(lines[0], "Warning: Failed to download assets: exit status: 1");
        assert!(lines.contains(
            &"    govuk-jekyll download-assets my-site/assets --version v5.10.2".to_string()
        ));
    }

    // =========================================================================
    // sample-pages
    // =========================================================================

    #[test]
    fn pages_summary_reports_mode() {
        let report = PagesReport {
            site_dir: PathBuf::from("site"),
            asset_mode: Some(AssetMode::Cdn),
            pages: vec![],
        };
        let lines = format_pages_output(&report);
        assert!(lines.contains(&"Asset mode detected: CDN".to_string()));
        assert!(lines.contains(&"Sample pages have been created in site".to_string()));
    }

    #[test]
    fn pages_summary_unknown_mode() {
        let report = PagesReport {
            site_dir: PathBuf::from("site"),
            asset_mode: None,
            pages: vec![],
        };
        assert!(format_pages_output(&report).contains(&"Asset mode detected: unknown".to_string()));
    }
}
