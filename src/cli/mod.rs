//! CLI definitions for the site-search command-line interface.
//!
//! Three subcommands: `index` runs one indexing pass and reports it,
//! `search` indexes then answers a single query, and `interactive` feeds
//! stdin lines through the debouncer as if they were typed into the search
//! box while indexing runs in the background.

pub mod display;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use site_search::SearchConfig;

#[derive(Parser)]
#[command(
    name = "site-search",
    about = "Crawl a static site and search its pages",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    /// Root URL of the site, e.g. http://localhost:8000/
    #[arg(short, long)]
    pub site: Option<String>,

    /// Page hosting the search box, relative to the site root
    #[arg(short, long)]
    pub page: Option<String>,

    /// JSON configuration file; --site and --page override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one indexing pass and print its summary
    Index {
        #[command(flatten)]
        site: SiteArgs,

        /// Dump the indexed documents as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },

    /// Index the site, then run a single query
    Search {
        #[command(flatten)]
        site: SiteArgs,

        /// Print the results-container markup instead of text
        #[arg(long)]
        html: bool,

        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Read queries from stdin while the index builds in the background
    Interactive {
        #[command(flatten)]
        site: SiteArgs,

        /// Print the results-container markup instead of text
        #[arg(long)]
        html: bool,
    },
}

impl SiteArgs {
    /// Resolve the effective configuration
    pub fn load(&self) -> anyhow::Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => load_file(path)?,
            None => {
                let site = self
                    .site
                    .as_deref()
                    .context("either --site or --config is required")?;
                return Ok(SearchConfig::builder()
                    .current_page(self.page.clone().unwrap_or_else(|| "index.html".to_string()))
                    .site_url(site)
                    .build()?);
            }
        };
        if let Some(site) = &self.site {
            config.set_site_url(site)?;
        }
        if let Some(page) = &self.page {
            config.set_current_page(page.clone());
        }
        Ok(config)
    }
}

fn load_file(path: &Path) -> anyhow::Result<SearchConfig> {
    SearchConfig::from_json_file(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}
