// site-search: index a static site and query it from the terminal.

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use cli::display::{format_view, print_summary};
use cli::{Cli, Commands};
use site_search::{
    IndexedDocument, QueryDebouncer, ResultSink, SearchView, SiteSearch, TracingProgress,
    render_view,
};

/// Prints every view the debouncer lets through
struct StdoutSink {
    html: bool,
}

impl ResultSink for StdoutSink {
    fn render(&self, _query: &str, view: &SearchView) {
        if self.html {
            println!("{}", render_view(view));
        } else {
            println!("{}", format_view(view));
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Index { site, json } => {
            let engine = SiteSearch::new(site.load()?)?;
            let summary = engine.build_index(&TracingProgress).await?;
            if json {
                let snapshot = engine.snapshot();
                let documents: Vec<&IndexedDocument> = snapshot.iter().map(AsRef::as_ref).collect();
                println!("{}", serde_json::to_string_pretty(&documents)?);
            } else {
                print_summary(&summary, engine.state());
            }
        }
        Commands::Search { site, html, query } => {
            let engine = SiteSearch::new(site.load()?)?;
            engine.build_index(&TracingProgress).await?;
            StdoutSink { html }.render("", &engine.query(&query.join(" ")));
        }
        Commands::Interactive { site, html } => {
            let engine = SiteSearch::new(site.load()?)?;
            let indexing = engine.schedule_indexing();
            let debouncer = QueryDebouncer::new(Arc::clone(&engine), Arc::new(StdoutSink { html }));

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut pending = None;
            while let Some(line) = lines.next_line().await? {
                pending = Some(debouncer.on_input(&line));
            }
            if let Some(handle) = pending {
                handle.await?;
            }

            match indexing.await? {
                Ok(summary) => print_summary(&summary, engine.state()),
                Err(e) => tracing::warn!("Indexing did not complete: {e}"),
            }
        }
    }
    Ok(())
}
