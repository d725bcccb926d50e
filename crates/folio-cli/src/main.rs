//! Folio CLI
//!
//! Runs the portfolio's bootstrap, router and renderer against a local
//! content directory, so fragments can be checked before they are published.
//!
//! ## Usage
//!
//! ```bash
//! # Show the page registry for an edition
//! folio pages --edition ssb
//!
//! # Check which fragments load from a directory
//! folio check --root ./site
//!
//! # Fail if any page would render as not found
//! folio check --root ./site --strict
//!
//! # Preview what a hash renders
//! folio render --root ./site "#task2"
//! ```

mod source;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use folio_core::{Clock, MemoryView, PageRegistry, Route, Site, SiteConfig, SiteEdition};
use tracing_subscriber::EnvFilter;

use crate::source::DirectorySource;

/// Folio - portfolio site checker
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - check and preview portfolio content offline")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON site config (same format as the page's folio-config block)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pages, their source files and navigation ids
    Pages {
        #[arg(short, long, value_enum, default_value_t = Edition::Standard)]
        edition: Edition,
    },

    /// Load every page from a content directory and report what loaded
    Check {
        /// Directory holding the HTML fragments
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Edition::Standard)]
        edition: Edition,

        /// Exit with an error if any page would render as not found
        #[arg(long)]
        strict: bool,
    },

    /// Route a hash and show what the page would display
    Render {
        /// URL fragment, e.g. "#task2" (empty for the default page)
        hash: String,

        /// Directory holding the HTML fragments
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Edition::Standard)]
        edition: Edition,

        /// Print the rendered HTML
        #[arg(long)]
        html: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Edition {
    Standard,
    Ssb,
}

impl From<Edition> for SiteEdition {
    fn from(edition: Edition) -> Self {
        match edition {
            Edition::Standard => SiteEdition::Standard,
            Edition::Ssb => SiteEdition::Ssb,
        }
    }
}

struct TokioClock;

impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Pages { edition } => show_pages(edition.into()),
        Commands::Check {
            root,
            edition,
            strict,
        } => check(config, &root, edition.into(), strict).await?,
        Commands::Render {
            hash,
            root,
            edition,
            html,
        } => render(config, &root, edition.into(), &hash, html).await?,
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    SiteConfig::from_json(&json).with_context(|| format!("Invalid config {}", path.display()))
}

fn show_pages(edition: SiteEdition) {
    let registry = PageRegistry::for_edition(edition);
    println!("Pages ({} edition):", edition);
    for entry in registry.iter() {
        let source = entry.source.as_deref().unwrap_or("(none)");
        let nav = registry.nav_id(&entry.name).unwrap_or_default();
        println!("  {:<12} {:<22} {}", entry.name, source, nav);
    }
}

async fn bootstrap(config: SiteConfig, root: &Path, edition: SiteEdition) -> Result<Site> {
    if !root.is_dir() {
        bail!("Content directory not found: {}", root.display());
    }
    let source = DirectorySource::new(root);
    Ok(Site::bootstrap(config, edition, &source).await)
}

async fn check(config: SiteConfig, root: &Path, edition: SiteEdition, strict: bool) -> Result<()> {
    let site = bootstrap(config, root, edition).await?;

    println!("Content check ({} edition, {}):", edition, root.display());
    let mut missing = Vec::new();
    for entry in site.registry().iter() {
        let html = site.cache().get(&entry.name).unwrap_or_default();
        if html.is_empty() {
            let reason = if entry.source.is_some() { "not loaded" } else { "no source" };
            println!("  {:<12} NOT FOUND ({})", entry.name, reason);
            missing.push(entry.name.clone());
        } else {
            println!("  {:<12} ok ({} bytes)", entry.name, html.len());
        }
    }
    println!(
        "{} of {} pages loaded",
        site.cache().loaded_count(),
        site.registry().len()
    );

    if strict && !missing.is_empty() {
        bail!("Pages would render as not found: {}", missing.join(", "));
    }
    Ok(())
}

async fn render(
    config: SiteConfig,
    root: &Path,
    edition: SiteEdition,
    hash: &str,
    html: bool,
) -> Result<()> {
    let site = bootstrap(config, root, edition).await?;

    match site.router().route(hash) {
        Route::Reference(id) => {
            println!("Reference: {}", id);
            println!("Scroll target in current content; no page render.");
        }
        Route::Page(page) => {
            let mut view = MemoryView::with_shell();
            let Some(rendered) = site.renderer().render(&mut view, &TokioClock, &page).await else {
                bail!("Render of {} was superseded", page);
            };

            println!("Page: {}", rendered.page);
            if rendered.not_found {
                println!("Outcome: not found");
            } else {
                println!("Outcome: content ({} bytes)", view.content().len());
            }
            println!("Active nav: {}", rendered.active_nav.as_deref().unwrap_or("(none)"));
            if html {
                println!();
                println!("{}", view.content().trim());
            }
        }
    }
    Ok(())
}
