use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List => commands::list::run(ctx, flags).await,
        Commands::Search(args) => commands::search::run(&args.term, ctx, flags).await,
        Commands::Show(args) => commands::show::run(&args.id, ctx, flags).await,
        Commands::Browse => commands::browse::run(ctx, flags).await,
    }
}
