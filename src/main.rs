//! modelpick - interactive picker for the OpenRouter model catalog

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use modelpick::catalog::{CatalogFilter, CatalogStore};
use modelpick::selector::Outcome;

/// Interactive picker for the OpenRouter model catalog
#[derive(Parser)]
#[command(name = "modelpick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Restrict the catalog by tool-calling support
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    filter: FilterArg,

    /// Model id to mark as current in the picker
    #[arg(long)]
    model: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked catalog, one model per line
    List,
    /// Clear the model cache so the next run refetches
    Refresh,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    /// All models
    All,
    /// Only models with tool-calling support
    Tools,
    /// Only models without tool-calling support
    NoTools,
}

impl From<FilterArg> for CatalogFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Tools => Self::ToolsOnly,
            FilterArg::NoTools => Self::NoTools,
        }
    }
}

fn main() -> Result<()> {
    // Log to the temp dir - tail with: tail -f $TMPDIR/modelpick.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender =
            tracing_appender::rolling::never(std::env::temp_dir(), "modelpick.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let store = CatalogStore::new();
    let filter = CatalogFilter::from(cli.filter);

    match cli.command {
        Some(Commands::List) => {
            let catalog = store.get_catalog(filter);
            for model in &catalog.models {
                println!("{}", model.summary());
            }
            Ok(())
        }
        Some(Commands::Refresh) => {
            store.invalidate();
            println!("Model cache cleared.");
            Ok(())
        }
        None => match modelpick::tui::run_selector(&store, filter, cli.model)? {
            Outcome::Picked(id) => {
                println!("{id}");
                Ok(())
            }
            Outcome::Cancelled => {
                eprintln!("No model selected.");
                Ok(())
            }
        },
    }
}
