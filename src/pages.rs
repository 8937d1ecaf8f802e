//! Sample pages for an existing site (`sample-pages` command).
//!
//! Writes three Markdown pages built from GOV.UK Frontend component markup:
//! a start page, a question page with radios and a components showcase. The
//! site's asset mode is read from its [`SiteRecord`] purely for reporting;
//! the pages themselves don't depend on it.

use crate::templates::{LAYOUT_NAME, page, start_button};
use crate::types::{AssetMode, SiteRecord};
use log::warn;
use maud::{Markup, html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagesError {
    #[error("Directory '{0}' does not exist. Run `govuk-jekyll create-site` first.")]
    SiteMissing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug)]
pub struct PagesReport {
    pub site_dir: PathBuf,
    /// `None` when the site has no readable record.
    pub asset_mode: Option<AssetMode>,
    /// Page file names in write order.
    pub pages: Vec<String>,
}

/// Asset mode recorded by `create-site`, if any.
pub fn detect_asset_mode(site_dir: &Path) -> Option<AssetMode> {
    let mode = SiteRecord::load(site_dir).map(|r| r.asset_mode);
    if mode.is_none() {
        warn!(
            "Could not detect asset mode: no readable {} in {}",
            crate::types::SITE_RECORD_FILENAME,
            site_dir.display()
        );
    }
    mode
}

/// Write the sample pages into `site_dir`, replacing earlier copies.
pub fn create_sample_pages(site_dir: &Path) -> Result<PagesReport, PagesError> {
    if !site_dir.is_dir() {
        return Err(PagesError::SiteMissing(site_dir.to_path_buf()));
    }
    let asset_mode = detect_asset_mode(site_dir);

    let pages = [
        ("start-page.md", start_page()),
        ("question-page.md", question_page()),
        ("components.md", components_page()),
    ];
    let mut written = Vec::with_capacity(pages.len());
    for (name, content) in pages {
        fs::write(site_dir.join(name), content)?;
        println!("Created {name}");
        written.push(name.to_string());
    }

    Ok(PagesReport {
        site_dir: site_dir.to_path_buf(),
        asset_mode,
        pages: written,
    })
}

// ============================================================================
// Page content
// ============================================================================

fn bullet_list(items: &[&str]) -> Markup {
    html! {
        ul class="govuk-list govuk-list--bullet" {
            @for item in items { li { (item) } }
        }
    }
}

pub fn start_page() -> String {
    let body = html! {
        div class="govuk-grid-row" {
            div class="govuk-grid-column-two-thirds" {
                h1 class="govuk-heading-xl" { "Service name goes here" }
                p class="govuk-body" { "Use this service to:" }
                (bullet_list(&["do something", "update something", "apply for something"]))
                p class="govuk-body" { "Registering takes around 5 minutes." }
                (start_button("question-page"))
                h2 class="govuk-heading-m" { "Before you start" }
                p class="govuk-body" { "You'll need:" }
                (bullet_list(&["item 1", "item 2", "item 3"]))
                p class="govuk-body" {
                    "Read the "
                    a href="#" class="govuk-link" { "guidance notes" }
                    " before completing this application."
                }
            }
            div class="govuk-grid-column-one-third" {
                aside class="govuk-prototype-kit-common-templates-related-items" role="complementary" {
                    h2 class="govuk-heading-m" id="subsection-title" { "Related content" }
                    nav role="navigation" aria-labelledby="subsection-title" {
                        ul class="govuk-list govuk-!-font-size-16" {
                            @for _ in 0..2 {
                                li { a href="#" class="govuk-link" { "Related link" } }
                            }
                        }
                    }
                }
            }
        }
    };
    page(&[("layout", LAYOUT_NAME), ("title", "Start page example")], body)
}

const NATIONS: [(&str, &str); 4] = [
    ("england", "England"),
    ("scotland", "Scotland"),
    ("wales", "Wales"),
    ("northern-ireland", "Northern Ireland"),
];

fn radio(index: usize, value: &str, label: &str) -> Markup {
    let id = if index == 1 {
        "where-do-you-live".to_string()
    } else {
        format!("where-do-you-live-{index}")
    };
    html! {
        div class="govuk-radios__item" {
            input class="govuk-radios__input" id=(id) name="where-do-you-live" type="radio" value=(value);
            label class="govuk-label govuk-radios__label" for=(id) { (label) }
        }
    }
}

pub fn question_page() -> String {
    let body = html! {
        div class="govuk-grid-row" {
            div class="govuk-grid-column-two-thirds" {
                form action="components" method="get" {
                    div class="govuk-form-group" {
                        fieldset class="govuk-fieldset" {
                            legend class="govuk-fieldset__legend govuk-fieldset__legend--l" {
                                h1 class="govuk-fieldset__heading" { "Where do you live?" }
                            }
                            div class="govuk-radios" data-module="govuk-radios" {
                                @for (i, (value, label)) in NATIONS.iter().enumerate() {
                                    (radio(i + 1, value, label))
                                }
                                div class="govuk-radios__divider" { "or" }
                                (radio(5, "abroad", "I am a British citizen living abroad"))
                            }
                        }
                    }
                    button class="govuk-button" data-module="govuk-button" { "Continue" }
                }
            }
        }
    };
    page(
        &[
            ("layout", LAYOUT_NAME),
            ("title", "Question page example"),
            ("show_back_link", "true"),
        ],
        body,
    )
}

fn summary_row(key: &str, value: Markup, change_label: &str) -> Markup {
    html! {
        div class="govuk-summary-list__row" {
            dt class="govuk-summary-list__key" { (key) }
            dd class="govuk-summary-list__value" { (value) }
            dd class="govuk-summary-list__actions" {
                a class="govuk-link" href="#" {
                    "Change"
                    span class="govuk-visually-hidden" { " " (change_label) }
                }
            }
        }
    }
}

fn components_body() -> Markup {
    html! {
        div class="govuk-grid-row" {
            div class="govuk-grid-column-full" {
                h1 class="govuk-heading-xl" { "GOV.UK Frontend Components" }
                p class="govuk-body-l" { "This page demonstrates various GOV.UK Frontend components." }
            }
        }
        div class="govuk-grid-row" {
            div class="govuk-grid-column-two-thirds" {
                h2 class="govuk-heading-l" { "Typography" }
                h1 class="govuk-heading-xl" { "govuk-heading-xl" }
                h2 class="govuk-heading-l" { "govuk-heading-l" }
                h3 class="govuk-heading-m" { "govuk-heading-m" }
                h4 class="govuk-heading-s" { "govuk-heading-s" }
                @for class in ["govuk-body-l", "govuk-body", "govuk-body-s"] {
                    p class=(class) { (class) }
                }

                h2 class="govuk-heading-l" { "Buttons" }
                button class="govuk-button" data-module="govuk-button" { "Default button" }
                button class="govuk-button govuk-button--secondary" data-module="govuk-button" { "Secondary button" }
                button class="govuk-button govuk-button--warning" data-module="govuk-button" { "Warning button" }
                button class="govuk-button" disabled="disabled" aria-disabled="true" data-module="govuk-button" { "Disabled button" }

                h2 class="govuk-heading-l" { "Text input" }
                div class="govuk-form-group" {
                    label class="govuk-label" for="input-example" { "National Insurance number" }
                    div id="input-example-hint" class="govuk-hint" {
                        "It's on your National Insurance card, benefit letter, payslip or P60. For example, 'QQ 12 34 56 C'."
                    }
                    input class="govuk-input" id="input-example" name="test-name" type="text" aria-describedby="input-example-hint";
                }

                h2 class="govuk-heading-l" { "Error messages" }
                div class="govuk-form-group govuk-form-group--error" {
                    label class="govuk-label" for="file-upload-1" { "Upload a file" }
                    div id="file-upload-1-hint" class="govuk-hint" { "The file must be a PDF" }
                    span id="file-upload-1-error" class="govuk-error-message" {
                        span class="govuk-visually-hidden" { "Error:" }
                        " The file must be a PDF"
                    }
                    input class="govuk-file-upload govuk-file-upload--error" id="file-upload-1" name="file-upload-1" type="file" aria-describedby="file-upload-1-hint file-upload-1-error";
                }

                h2 class="govuk-heading-l" { "Warning text" }
                div class="govuk-warning-text" {
                    span class="govuk-warning-text__icon" aria-hidden="true" { "!" }
                    strong class="govuk-warning-text__text" {
                        span class="govuk-warning-text__assistive" { "Warning" }
                        " You can be fined up to £5,000 if you don't register."
                    }
                }

                h2 class="govuk-heading-l" { "Summary list" }
                dl class="govuk-summary-list" {
                    (summary_row("Name", html! { "Sarah Philips" }, "name"))
                    (summary_row("Date of birth", html! { "5 January 1978" }, "date of birth"))
                    (summary_row("Address", html! { "72 Guild Street" br; "London" br; "SE23 6FH" }, "address"))
                    (summary_row(
                        "Contact details",
                        html! {
                            p class="govuk-body" { "07700 900457" }
                            p class="govuk-body" { "sarah.phillips@example.com" }
                        },
                        "contact details",
                    ))
                }

                h2 class="govuk-heading-l" { "Notification banner" }
                div class="govuk-notification-banner" role="region" aria-labelledby="govuk-notification-banner-title" data-module="govuk-notification-banner" {
                    div class="govuk-notification-banner__header" {
                        h2 class="govuk-notification-banner__title" id="govuk-notification-banner-title" { "Important" }
                    }
                    div class="govuk-notification-banner__content" {
                        p class="govuk-notification-banner__heading" {
                            "You have 7 days left to send your application. "
                            a class="govuk-notification-banner__link" href="#" { "View application" }
                            "."
                        }
                    }
                }
                div class="govuk-notification-banner govuk-notification-banner--success" role="alert" aria-labelledby="govuk-notification-banner-title" data-module="govuk-notification-banner" {
                    div class="govuk-notification-banner__header" {
                        h2 class="govuk-notification-banner__title" id="govuk-notification-banner-title" { "Success" }
                    }
                    div class="govuk-notification-banner__content" {
                        h3 class="govuk-notification-banner__heading" { "Application complete" }
                        p class="govuk-body" {
                            "Your reference number is "
                            br;
                            strong { "HDJ2123F" }
                        }
                    }
                }
            }
        }
    }
}

pub fn components_page() -> String {
    page(
        &[
            ("layout", LAYOUT_NAME),
            ("title", "Component examples"),
            ("show_back_link", "true"),
            ("show_phase_banner", "true"),
            ("phase", "beta"),
        ],
        components_body(),
    )
}
