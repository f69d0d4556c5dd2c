//! Tessel CLI
//!
//! Builds layout documents and prints the constraints they install.
//! Usage:
//! - `tessel list` - bundled demo screens
//! - `tessel show <demo>` - build one of them
//! - `tessel file <path>` - build a TOML document from disk

mod demos;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tessel_core::ViewTree;
use tessel_layout::LayoutDocument;
use tracing_subscriber::EnvFilter;

use crate::report::Report;

#[derive(Parser, Debug)]
#[command(name = "tessel")]
#[command(about = "Inspect the constraints emitted by Tessel layouts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the bundled demo screens
    List,

    /// Build a bundled demo screen
    Show {
        /// Demo name, as printed by `list`
        name: String,
    },

    /// Build a layout document from disk
    File {
        /// Path to a TOML layout document
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::List => {
            for demo in demos::DEMOS {
                println!("{:<22} {}", demo.name, demo.summary());
            }
            Ok(())
        }
        Command::Show { name } => {
            let demo = demos::find(&name)
                .with_context(|| format!("no demo named '{name}', try `tessel list`"))?;
            run(demo.source, cli.json).with_context(|| format!("demo '{name}'"))
        }
        Command::File { path } => {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("read layout document '{}'", path.display()))?;
            run(&source, cli.json).with_context(|| format!("layout document '{}'", path.display()))
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(source: &str, json: bool) -> Result<()> {
    let doc = LayoutDocument::from_toml_str(source)?;
    let mut tree = ViewTree::new();
    let built = doc.build(&mut tree)?;
    tracing::info!(views = built.views.len(), "layout built");

    let report = Report::collect(&tree, built.root.view());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
