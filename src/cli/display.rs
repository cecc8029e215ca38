//! Terminal display of indexing summaries and search views.
//!
//! Highlights from `<mark>` become bold when stdout is a terminal and
//! brackets otherwise; HTML entities in snippets are decoded.

use std::io::IsTerminal;
use std::sync::OnceLock;

use site_search::{IndexingState, IndexingSummary, SearchView};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

static COLOR: OnceLock<bool> = OnceLock::new();

fn use_color() -> bool {
    *COLOR.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal())
}

/// Snippet markup to terminal text
pub fn snippet_to_text(snippet: &str) -> String {
    let (open, close) = if use_color() { (BOLD, RESET) } else { ("[", "]") };
    let marked = snippet.replace("<mark>", open).replace("</mark>", close);
    html_escape::decode_html_entities(&marked).into_owned()
}

pub fn print_summary(summary: &IndexingSummary, state: IndexingState) {
    println!(
        "Indexed {} of {} pages via {} ({} too short, {} failed){}",
        summary.indexed,
        summary.candidates,
        summary.strategy,
        summary.rejected,
        summary.failed,
        if matches!(state, IndexingState::Ready { partial: true }) {
            " [partial]"
        } else {
            ""
        }
    );
}

pub fn format_view(view: &SearchView) -> String {
    match view {
        SearchView::Idle => site_search::search::IDLE_MESSAGE.to_string(),
        SearchView::Loading => site_search::search::LOADING_MESSAGE.to_string(),
        SearchView::NoResults { query } => {
            format!("{} ({query})", site_search::search::NO_RESULTS_MESSAGE)
        }
        SearchView::Results { query, total, groups } => {
            let (dim, reset) = if use_color() { (DIM, RESET) } else { ("", "") };
            let mut out = format!("{total} results for \"{query}\"\n");
            for group in groups {
                out.push_str(&format!("\n{} ({})\n", group.label, group.len()));
                for result in &group.results {
                    let doc = &result.document;
                    let title = if doc.title.is_empty() { &doc.url } else { &doc.title };
                    out.push_str(&format!("  {title}  {dim}{} {:.1}{reset}\n", doc.url, result.score));
                    let detail = match &result.context {
                        Some(context) => snippet_to_text(context),
                        None => doc.description.clone(),
                    };
                    if !detail.is_empty() {
                        out.push_str(&format!("    {detail}\n"));
                    }
                }
            }
            out
        }
    }
}
