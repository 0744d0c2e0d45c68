use anyhow::Context;
use catalog_core::enums::FetchState;
use catalog_core::responses::SearchResultsResponse;
use catalog_search::FilteredItems;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{count, take_limited};
use crate::context::AppContext;
use crate::output::items::output_listing;

/// Handle `catalog browse`.
///
/// Each stdin line replaces the search term. Every result the pipeline
/// publishes is printed as it lands; `searching…` marks the busy window.
/// Ends on EOF.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pipeline = &ctx.pipeline;
    let subscription = pipeline.subscribe();
    let mut filtered = subscription.filtered_items();
    let mut searching = subscription.is_searching();
    let mut fetch_state = subscription.fetch_state();
    let fetch = pipeline.fetch_data();

    let limit = ctx.limit(flags.limit);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !flags.quiet {
        eprintln!("type a search term and press enter; ctrl-d to quit");
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("failed to read search term from stdin")? {
                    Some(line) => pipeline.set_search_term(line.trim()),
                    None => break,
                }
            }
            Ok(()) = searching.changed() => {
                let busy = *searching.borrow_and_update();
                if busy && !flags.quiet {
                    eprintln!("searching…");
                }
            }
            Ok(()) = filtered.changed() => {
                let published = filtered.borrow_and_update().clone();
                print_published(&published, pipeline.raw_items().len(), limit, flags)?;
            }
            Ok(()) = fetch_state.changed() => {
                let state = fetch_state.borrow_and_update().clone();
                report_fetch(&state, &ctx.source_label, flags.quiet);
            }
        }
    }

    fetch.abort();
    Ok(())
}

fn print_published(
    published: &FilteredItems,
    total_items: usize,
    limit: usize,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(term) = &published.term else {
        return Ok(());
    };
    let response = SearchResultsResponse {
        term: term.clone(),
        results: take_limited(&published.items, limit),
        total_results: count(published.items.len()),
        total_items: count(total_items),
    };
    output_listing(&response, &response.results, Some(term.as_str()), flags.format)
}

fn report_fetch(state: &FetchState, source_label: &str, quiet: bool) {
    match state {
        FetchState::Failed { message } => {
            eprintln!("fetch from {source_label} failed: {message}");
        }
        FetchState::Loaded { count } if !quiet => {
            eprintln!("{count} items loaded from {source_label}");
        }
        _ => {}
    }
}
