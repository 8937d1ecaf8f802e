use clap::{Parser, Subcommand};
use govuk_jekyll::{assets, config, output, pages, scaffold, types::AssetMode};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "govuk-jekyll")]
#[command(about = "Scaffold Jekyll sites styled with GOV.UK Frontend")]
#[command(long_about = "\
Scaffold Jekyll sites styled with GOV.UK Frontend

Typical session:

  govuk-jekyll create-site my-site --site-name \"Apply for a thing\"
  govuk-jekyll sample-pages my-site
  cd my-site && bundle install && bundle exec jekyll serve

Without --cdn, create-site downloads the Frontend release into my-site/assets
by running download-assets. Use --cdn to load assets from jsDelivr instead.

Settings such as the pinned Frontend version and site email come from an
optional govuk-jekyll.toml. Run 'govuk-jekyll gen-config' for a documented one.

Set RUST_LOG=debug for diagnostic logging.")]
#[command(version)]
struct Cli {
    /// Config file (missing file means stock defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download a GOV.UK Frontend release and copy its assets
    DownloadAssets {
        /// Directory to receive css/, js/, fonts/ and images/
        #[arg(default_value = "assets")]
        output_dir: PathBuf,
        /// Release tag, e.g. v5.10.2 (default: latest release)
        #[arg(long)]
        version: Option<String>,
    },
    /// Create a Jekyll site skeleton with the GOV.UK layout
    CreateSite {
        /// Site root directory
        #[arg(default_value = ".")]
        output_dir: PathBuf,
        /// Site title (default: site.name from config)
        #[arg(long)]
        site_name: Option<String>,
        /// Load GOV.UK Frontend from the CDN instead of self-hosting it
        #[arg(long)]
        cdn: bool,
    },
    /// Add sample pages to an existing site
    SamplePages {
        /// Site root directory
        #[arg(default_value = "test_jekyll_site")]
        site_dir: PathBuf,
    },
    /// Print a stock govuk-jekyll.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::DownloadAssets {
            output_dir,
            version,
        } => {
            let tool_config = load(config_path)?;
            let report =
                assets::download_assets(&output_dir, version.as_deref(), &tool_config.frontend)?;
            output::print_assets_output(&report);
        }
        Command::CreateSite {
            output_dir,
            site_name,
            cdn,
        } => {
            let tool_config = load(config_path)?;
            let options = scaffold::SiteOptions {
                output_dir,
                site_name: site_name.unwrap_or_else(|| tool_config.site.name.clone()),
                mode: AssetMode::from_cdn_flag(cdn),
            };
            let report = scaffold::create_site(&options, &tool_config, config_path)?;
            output::print_scaffold_output(&report);
        }
        Command::SamplePages { site_dir } => {
            let report = pages::create_sample_pages(&site_dir)?;
            output::print_pages_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn load(config_path: Option<&Path>) -> Result<config::ToolConfig, config::ConfigError> {
    config::load_config(config_path.unwrap_or(Path::new(config::CONFIG_FILENAME)))
}
