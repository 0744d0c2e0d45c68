use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `catalog` binary.
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Catalog - search a remote product catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read items from a JSON file instead of the remote API
    #[arg(long, global = true, value_name = "PATH")]
    pub fixture: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            fixture: self.fixture.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "catalog",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["catalog", "search", "pro", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        match cli.command {
            Commands::Search(args) => assert_eq!(args.term, "pro"),
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn show_takes_an_id() {
        let cli = Cli::try_parse_from(["catalog", "show", "7"]).expect("cli should parse");
        match cli.command {
            Commands::Show(args) => assert_eq!(args.id, "7"),
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn search_requires_a_term() {
        assert!(Cli::try_parse_from(["catalog", "search"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["catalog", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "table", "raw"] {
            let cli = Cli::try_parse_from(["catalog", "--format", value, "browse"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Browse));
        }
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["catalog", "--fixture", "/tmp/items.json", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.fixture.as_deref(), Some(Path::new("/tmp/items.json")));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
