//! Syllabi index generator
//!
//! Builds a single HTML page listing every course's syllabi, grouped by
//! category, from a JSON course map and a `courses/<code>/` directory tree.

mod config;
mod constants;
mod error;
mod formatter;
mod generator;
mod loader;
mod logging;
mod models;
mod syllabus;

use clap::Parser;
use config::{Layout, SiteConfig};
use error::Result;
use generator::{render_listing, render_page, PageAssets};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Generate the syllabi index page.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Site root containing the course map, the syllabi and the portraits
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Course map to use instead of the configured one
    #[arg(long)]
    map: Option<PathBuf>,

    /// Site config file [default: <root>/site.toml, if present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the page to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

/// Main entry point for the syllabi index generator.
///
/// This program:
/// 1. Loads the site config and the course map
/// 2. Lists each course's syllabi, newest first, skipping missing courses
/// 3. Renders the category/course widgets into the page
/// 4. Writes the page to stdout (or `--output`)
fn main() {
    logging::init_logging();

    if let Err(err) = run(Cli::parse()) {
        tracing::error!("{}", err);
        eprintln!("syllabi-index error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::discover(&cli.root)?,
    };

    let mut layout = Layout::new(&cli.root, &config);
    if let Some(map) = cli.map {
        layout.map_path = map;
    }

    let map = loader::load_course_map(&layout.map_path)?;
    tracing::info!(
        "Loaded {} categories from {}",
        map.categories.len(),
        layout.map_path.display()
    );

    let listing = loader::build_listing(&map, &layout)?;
    tracing::info!(
        "Listing {} syllabi across {} courses",
        listing.syllabus_count(),
        listing
            .categories
            .iter()
            .map(|c| c.courses.len())
            .sum::<usize>()
    );

    let courses = render_listing(&listing, &layout);
    let page = render_page(PageAssets::from(&config), &courses);

    match cli.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", page))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", page)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
