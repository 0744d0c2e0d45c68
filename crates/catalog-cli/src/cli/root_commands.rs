use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch the catalog and print every item.
    List,
    /// Fetch the catalog and print the items whose name contains a term.
    Search(SearchArgs),
    /// Print one item with its detail fields.
    Show(ShowArgs),
    /// Search interactively: every stdin line replaces the search term.
    Browse,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring to match against item names.
    pub term: String,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Item id as reported by `catalog list`.
    pub id: String,
}
