//! File contents for the generated Jekyll site.
//!
//! HTML is built with [maud](https://maud.lambda.xyz/) like everything else
//! this crate renders. Liquid tags (`{{ ... }}`, `{% ... %}`) pass through
//! [`liquid`] so Jekyll sees them verbatim. Plain text files (`_config.yml`,
//! `Gemfile`, `README.md`) are `format!` templates.

use crate::config::{FrontendConfig, SiteDefaults};
use crate::types::AssetMode;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Name of the layout every generated page uses.
pub const LAYOUT_NAME: &str = "govuk-default";

/// Emit a Liquid tag without HTML escaping.
pub fn liquid(tag: &str) -> PreEscaped<&str> {
    PreEscaped(tag)
}

/// A `relative_url`-filtered site path, e.g. `{{ '/assets/x.css' | relative_url }}`.
pub fn relative_url(path: &str) -> String {
    format!("{{{{ '{path}' | relative_url }}}}")
}

/// YAML front matter block followed by a blank line.
pub fn front_matter(fields: &[(&str, &str)]) -> String {
    let mut out = String::from("---\n");
    for (key, value) in fields {
        out.push_str(&format!("{key}: {value}\n"));
    }
    out.push_str("---\n\n");
    out
}

/// Join front matter and a rendered body into a page file.
pub fn page(fields: &[(&str, &str)], body: Markup) -> String {
    let mut out = front_matter(fields);
    out.push_str(&body.into_string());
    out.push('\n');
    out
}

// ============================================================================
// Asset URLs
// ============================================================================

/// Where the layout loads GOV.UK Frontend files from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrls {
    pub stylesheet: String,
    pub script: String,
    pub favicon: String,
    pub mask_icon: String,
    pub apple_touch_icon: String,
}

impl AssetUrls {
    pub fn for_mode(mode: AssetMode, frontend: &FrontendConfig) -> Self {
        let v = &frontend.site_version;
        match mode {
            AssetMode::Cdn => {
                let root = frontend.cdn_root();
                Self {
                    stylesheet: format!("{root}/dist/govuk-frontend-{v}.min.css"),
                    script: format!("{root}/dist/govuk-frontend-{v}.min.js"),
                    favicon: format!("{root}/dist/assets/images/favicon.ico"),
                    mask_icon: format!("{root}/dist/assets/images/govuk-icon-mask.svg"),
                    apple_touch_icon: format!("{root}/dist/assets/images/govuk-icon-180.png"),
                }
            }
            AssetMode::SelfHosted => Self {
                stylesheet: relative_url(&format!("/assets/css/govuk-frontend-{v}.min.css")),
                script: relative_url(&format!("/assets/js/govuk-frontend-{v}.min.js")),
                favicon: relative_url("/assets/images/favicon.ico"),
                mask_icon: relative_url("/assets/images/govuk-icon-mask.svg"),
                apple_touch_icon: relative_url("/assets/images/govuk-icon-180.png"),
            },
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

const JS_ENABLED: &str = "document.body.className = ((document.body.className) ? document.body.className + ' js-enabled' : 'js-enabled');";

const CROWN_PATH: &str = "M25 30.2c3.5 1.5 7.7-.2 9.1-3.7 1.5-3.6-.2-7.8-3.9-9.2-3.6-1.4-7.6.3-9.1 3.9-1.4 3.5.3 7.5 3.9 9zM9 39.5c3.6 1.5 7.8-.2 9.2-3.7 1.5-3.6-.2-7.8-3.9-9.1-3.6-1.5-7.6.2-9.1 3.8-1.4 3.5.3 7.5 3.8 9zM4.4 57.2c3.5 1.5 7.7-.2 9.1-3.8 1.5-3.6-.2-7.7-3.9-9.1-3.5-1.5-7.6.3-9.1 3.8-1.4 3.5.3 7.6 3.9 9.1zm38.3-21.4c3.5 1.5 7.7-.2 9.1-3.8 1.5-3.6-.2-7.7-3.9-9.1-3.6-1.5-7.6.3-9.1 3.8-1.3 3.6.4 7.7 3.9 9.1zm64.4-5.6c-3.6 1.5-7.8-.2-9.1-3.7-1.5-3.6.2-7.8 3.8-9.2 3.6-1.4 7.7.3 9.2 3.9 1.3 3.5-.4 7.5-3.9 9zm15.9 9.3c-3.6 1.5-7.7-.2-9.1-3.7-1.5-3.6.2-7.8 3.7-9.1 3.6-1.5 7.7.2 9.2 3.8 1.5 3.5-.3 7.5-3.8 9zm4.7 17.7c-3.6 1.5-7.8-.2-9.2-3.8-1.5-3.6.2-7.7 3.9-9.1 3.6-1.5 7.7.3 9.2 3.8 1.3 3.5-.4 7.6-3.9 9.1zM89.3 35.8c-3.6 1.5-7.8-.2-9.2-3.8-1.4-3.6.2-7.7 3.9-9.1 3.6-1.5 7.7.3 9.2 3.8 1.4 3.6-.3 7.7-3.9 9.1zM69.7 17.7l8.9 4.7V9.3l-8.9 2.8c-.2-.3-.5-.6-.9-.9L72.4 0H59.6l3.5 11.2c-.3.3-.6.5-.9.9l-8.8-2.8v13.1l8.8-4.7c.3.3.6.7.9.9l-5 15.4v.1c-.2.8-.4 1.6-.4 2.4 0 4.1 3.1 7.5 7 8.1h.2c.3 0 .7.1 1 .1.4 0 .7 0 1-.1h.2c4-.6 7.1-4.1 7.1-8.1 0-.8-.1-1.7-.4-2.4V34l-5.1-15.4c.4-.2.7-.6 1-.9zM66 92.8c16.9 0 32.8 1.1 47.1 3.2 4-16.9 8.9-26.7 14-33.5l-9.6-3.4c1 4.9 1.1 7.2 0 10.2-1.5-1.4-3-4.3-4.2-8.7L108.6 76c2.8-2 5-3.2 7.5-3.3-4.4 9.4-10 11.9-13.6 11.2-4.3-.8-6.3-4.6-5.6-7.9 1-4.7 5.7-5.9 8-.5 4.3-8.7-3-11.4-7.6-8.8 7.1-7.2 7.9-13.5 2.1-21.1-8 6.1-8.1 12.3-4.5 20.8-4.7-5.4-12.1-2.5-9.5 6.2 3.4-5.2 7.9-2 7.2 3.1-.6 4.3-6.4 7.8-13.5 7.2-10.3-.9-10.9-8-11.2-13.8 2.5-.5 7.1 1.8 11 7.3L80.2 60c-4.1 4.4-8 5.3-12.3 5.4 1.4-4.4 8-11.6 8-11.6H55.5s6.4 7.2 7.9 11.6c-4.2-.1-8-1-12.3-5.4l1.4 16.4c3.9-5.5 8.5-7.7 10.9-7.3-.3 5.8-.9 12.8-11.1 13.8-7.2.6-12.9-2.9-13.5-7.2-.7-5 3.8-8.3 7.1-3.1 2.7-8.7-4.6-11.6-9.4-6.2 3.7-8.5 3.6-14.7-4.6-20.8-5.8 7.6-5 13.9 2.2 21.1-4.7-2.6-11.9.1-7.7 8.8 2.3-5.5 7.1-4.2 8.1.5.7 3.3-1.3 7.1-5.7 7.9-3.5.7-9-1.8-13.5-11.2 2.5.1 4.7 1.3 7.5 3.3l-4.7-15.4c-1.2 4.4-2.7 7.2-4.3 8.7-1.1-3-.9-5.3 0-10.2l-9.5 3.4c5 6.9 9.9 16.7 14 33.5 14.8-2.1 30.8-3.2 47.7-3.2z";

const LICENCE_PATH: &str = "M421.5 142.8V.1l-50.7 32.3v161.1h112.4v-50.7zm-122.3-9.6A47.12 47.12 0 0 1 221 97.8c0-26 21.1-47.1 47.1-47.1 16.7 0 31.4 8.7 39.7 21.8l42.7-27.2A97.63 97.63 0 0 0 268.1 0c-36.5 0-68.3 20.1-85.1 49.7A98 98 0 0 0 97.8 0C43.9 0 0 43.9 0 97.8s43.9 97.8 97.8 97.8c36.5 0 68.3-20.1 85.1-49.7a97.76 97.76 0 0 0 149.6 25.4l19.4 22.2h3v-87.8h-80l24.3 27.5zM97.8 145c-26 0-47.1-21.1-47.1-47.1s21.1-47.1 47.1-47.1 47.2 21 47.2 47S123.8 145 97.8 145";

const OGL_URL: &str = "https://www.nationalarchives.gov.uk/doc/open-government-licence/version/3/";
const CROWN_COPYRIGHT_URL: &str = "https://www.nationalarchives.gov.uk/information-management/re-using-public-sector-information/uk-government-licensing-framework/crown-copyright/";

const FOOTER_LINKS: [&str; 4] = ["Help", "Privacy", "Cookies", "Accessibility statement"];

/// The `_layouts/govuk-default.html` template.
pub fn default_layout(urls: &AssetUrls) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" class="govuk-template" {
            head {
                meta charset="utf-8";
                title { (liquid("{% if page.title %}{{ page.title }} - {% endif %}{{ site.title }}")) }
                meta name="viewport" content="width=device-width, initial-scale=1, viewport-fit=cover";
                meta name="theme-color" content="#0b0c0c";
                meta http-equiv="X-UA-Compatible" content="IE=edge";
                link rel="stylesheet" href=(urls.stylesheet);
                link rel="stylesheet" href=(relative_url("/assets/css/custom.css"));
                link rel="shortcut icon" href=(urls.favicon) type="image/x-icon";
                link rel="mask-icon" href=(urls.mask_icon) color="#0b0c0c";
                link rel="apple-touch-icon" href=(urls.apple_touch_icon);
            }
            body class="govuk-template__body" {
                script { (PreEscaped(JS_ENABLED)) }
                a href="#main-content" class="govuk-skip-link" { "Skip to main content" }
                (header())
                div class="govuk-width-container" {
                    (liquid("{% if page.show_phase_banner %}"))
                    (phase_banner())
                    (liquid("{% endif %}"))
                    (liquid("{% if page.show_back_link %}"))
                    a href="javascript:window.history.back()" class="govuk-back-link" { "Back" }
                    (liquid("{% endif %}"))
                    main class="govuk-main-wrapper" id="main-content" role="main" {
                        (liquid("{{ content }}"))
                    }
                }
                (footer())
                script src=(urls.script) {}
                script { (PreEscaped("window.GOVUKFrontend.initAll()")) }
            }
        }
    };
    markup.into_string()
}

fn header() -> Markup {
    html! {
        header class="govuk-header" role="banner" data-module="govuk-header" {
            div class="govuk-header__container govuk-width-container" {
                div class="govuk-header__logo" {
                    a href=(relative_url("/")) class="govuk-header__link govuk-header__link--homepage" {
                        span class="govuk-header__logotype" {
                            svg aria-hidden="true" focusable="false" class="govuk-header__logotype-crown" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 132 97" height="30" width="36" {
                                path fill="currentColor" fill-rule="evenodd" d=(CROWN_PATH) {}
                            }
                            span class="govuk-header__logotype-text" { "GOV.UK" }
                        }
                    }
                }
                div class="govuk-header__content" {
                    a href=(relative_url("/")) class="govuk-header__link govuk-header__link--service-name" {
                        (liquid("{{ site.title }}"))
                    }
                }
            }
        }
    }
}

fn phase_banner() -> Markup {
    html! {
        div class="govuk-phase-banner" {
            p class="govuk-phase-banner__content" {
                strong class="govuk-tag govuk-phase-banner__content__tag" {
                    (liquid(r#"{{ page.phase | default: "alpha" }}"#))
                }
                span class="govuk-phase-banner__text" {
                    "This is a new service – your "
                    a class="govuk-link" href="#" { "feedback" }
                    " will help us to improve it."
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="govuk-footer" role="contentinfo" {
            div class="govuk-width-container" {
                div class="govuk-footer__meta" {
                    div class="govuk-footer__meta-item govuk-footer__meta-item--grow" {
                        h2 class="govuk-visually-hidden" { "Support links" }
                        ul class="govuk-footer__inline-list" {
                            @for label in FOOTER_LINKS {
                                li class="govuk-footer__inline-list-item" {
                                    a class="govuk-footer__link" href="#" { (label) }
                                }
                            }
                        }
                        svg aria-hidden="true" focusable="false" class="govuk-footer__licence-logo" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 483.2 195.7" height="17" width="41" {
                            path fill="currentColor" d=(LICENCE_PATH) {}
                        }
                        span class="govuk-footer__licence-description" {
                            "All content is available under the "
                            a class="govuk-footer__link" href=(OGL_URL) rel="license" { "Open Government Licence v3.0" }
                            ", except where otherwise stated"
                        }
                    }
                    div class="govuk-footer__meta-item" {
                        a class="govuk-footer__link govuk-footer__copyright-logo" href=(CROWN_COPYRIGHT_URL) { "© Crown copyright" }
                    }
                }
            }
        }
    }
}

/// The start button used on the home and start pages.
pub fn start_button(href: &str) -> Markup {
    html! {
        a href=(href) role="button" draggable="false" class="govuk-button govuk-button--start" data-module="govuk-button" {
            "Start now"
            svg class="govuk-button__start-icon" xmlns="http://www.w3.org/2000/svg" width="17.5" height="19" viewBox="0 0 33 40" aria-hidden="true" focusable="false" {
                path fill="currentColor" d="M0 0h13l20 20-20 20H0l20-20z" {}
            }
        }
    }
}

// ============================================================================
// Pages and static files
// ============================================================================

/// `index.md`: home page linking to the sample pages.
pub fn index_page() -> String {
    let body = html! {
        div class="govuk-grid-row" {
            div class="govuk-grid-column-two-thirds" {
                h1 class="govuk-heading-xl" { "GOV.UK Frontend with Jekyll" }
                p class="govuk-body-l" { "This is a sample site demonstrating GOV.UK Frontend components with Jekyll." }
                p class="govuk-body" { "This site uses the GOV.UK Frontend files to provide the styling and components." }
                h2 class="govuk-heading-m" { "Sample pages" }
                ul class="govuk-list govuk-list--bullet" {
                    li { a href="start-page" class="govuk-link" { "Start page example" } }
                    li { a href="question-page" class="govuk-link" { "Question page example" } }
                    li { a href="components" class="govuk-link" { "Component examples" } }
                }
                (start_button("start-page"))
            }
        }
    };
    page(&[("layout", LAYOUT_NAME), ("title", "Home")], body)
}

/// `_config.yml`.
pub fn config_yml(site_name: &str, site: &SiteDefaults) -> String {
    format!(
        r#"# Site settings
title: {site_name}
email: {email}
description: >-
  {description}
baseurl: "" # the subpath of your site, e.g. /blog
url: "" # the base hostname & protocol for your site, e.g. http://example.com

# Build settings
markdown: kramdown
plugins:
  - jekyll-feed

# Exclude from processing
exclude:
  - .sass-cache/
  - .jekyll-cache/
  - gemfiles/
  - Gemfile
  - Gemfile.lock
  - node_modules/
  - vendor/bundle/
  - vendor/cache/
  - vendor/gems/
  - vendor/ruby/
"#,
        email = site.email,
        description = site.description,
    )
}

/// `Gemfile`.
pub const GEMFILE: &str = r#"source "https://rubygems.org"

gem "jekyll", "~> 4.2"
gem "webrick", "~> 1.7"
gem "jekyll-feed", "~> 0.12"

# Windows and JRuby does not include zoneinfo files, so bundle the tzinfo-data gem
# and associated library.
platforms :mingw, :x64_mingw, :mswin, :jruby do
  gem "tzinfo", "~> 1.2"
  gem "tzinfo-data"
end

# Performance-booster for watching directories on Windows
gem "wdm", "~> 0.1.1", :platforms => [:mingw, :x64_mingw, :mswin]
"#;

/// `assets/css/custom.css`. The empty front matter makes Jekyll process it.
pub const CUSTOM_CSS: &str = r#"---
---
/* Custom styles for GOV.UK Frontend Jekyll site */

/* Add your custom styles below */
"#;

/// `README.md` for the generated site.
pub fn readme(version_tag: &str, mode: AssetMode, created: &str) -> String {
    format!(
        r#"# GOV.UK Frontend for Jekyll

This directory contains a Jekyll site with GOV.UK Frontend integration using {mode} assets.

## Version Information
- GOV.UK Frontend version: {version_tag}
- Created: {created}
- Asset mode: {mode}

## Getting Started

1. Install Jekyll and Bundler:
   ```
   gem install jekyll bundler
   ```

2. Install dependencies:
   ```
   bundle install --path vendor/bundle
   ```

3. Start the Jekyll server:
   ```
   bundle exec jekyll serve
   ```

4. View the site at [http://localhost:4000](http://localhost:4000)

## Components

This site includes sample pages demonstrating GOV.UK Frontend components:

- Home page
- Start page example
- Question page example
- Component examples page

For more information on available components, refer to the [GOV.UK Design System](https://design-system.service.gov.uk/components/).

## Customization

You can customize this site by:

1. Editing the `_config.yml` file to change site settings
2. Modifying the layout in `_layouts/{LAYOUT_NAME}.html`
3. Adding your own styles in `assets/css/custom.css`
4. Creating new pages using the GOV.UK Frontend components
"#
    )
}
