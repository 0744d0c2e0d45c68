use catalog_core::responses::ItemListResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{count, take_limited};
use crate::context::{AppContext, ensure_fetched};
use crate::output::items::output_listing;

/// Handle `catalog list`.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.fetch().await?;
    let items = ctx.pipeline.raw_items();

    let response = ItemListResponse {
        items: take_limited(&items, ctx.limit(flags.limit)),
        total_items: count(items.len()),
        fetch: state.clone(),
    };
    output_listing(&response, &response.items, None, flags.format)?;
    ensure_fetched(&state, &ctx.source_label)
}
