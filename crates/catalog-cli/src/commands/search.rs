use catalog_core::enums::FetchState;
use catalog_core::responses::SearchResultsResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{count, take_limited};
use crate::context::{AppContext, ensure_fetched};
use crate::output::items::output_listing;
use crate::progress::Progress;

/// Handle `catalog search <TERM>`.
///
/// Drives the pipeline exactly as an interactive session would: the term is
/// debounced, filtered after the configured latency, and printed once the
/// pipeline settles on it.
pub async fn run(term: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.pipeline.set_search_term(term);
    let mut subscription = ctx.pipeline.subscribe();
    let state = ctx.fetch().await?;

    let results = if matches!(state, FetchState::Failed { .. }) {
        Vec::new()
    } else {
        let spinner = Progress::spinner(&format!("searching for '{term}'…"));
        let results = subscription.results_for(term).await;
        spinner.finish_clear();
        results.to_vec()
    };

    let response = SearchResultsResponse {
        term: term.to_string(),
        results: take_limited(&results, ctx.limit(flags.limit)),
        total_results: count(results.len()),
        total_items: count(ctx.pipeline.raw_items().len()),
    };
    output_listing(&response, &response.results, Some(term), flags.format)?;
    ensure_fetched(&state, &ctx.source_label)
}
