use catalog_core::responses::ItemDetailResponse;

use crate::cli::GlobalFlags;
use crate::context::{AppContext, ensure_fetched};
use crate::output::items::output_detail;

/// Handle `catalog show <ID>`.
pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.fetch().await?;
    ensure_fetched(&state, &ctx.source_label)?;

    let item = ctx.pipeline.get_item_by_id(id)?;
    output_detail(&ItemDetailResponse::new(item), flags.format)
}
