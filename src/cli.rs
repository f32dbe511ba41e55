//! CLI commands for kcmrun.
//!
//! Provides the user-facing tooling: list, search, open.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::entry::ModuleEntry;
use crate::index::ModuleIndex;
use crate::launcher::ModuleLauncher;

#[derive(Parser)]
#[command(name = "kcmrun")]
#[command(about = "Find and open KDE System Settings modules", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every settings module found on this system
    List {
        /// Print machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the settings modules matching a query
    Search {
        /// Matched against module names, descriptions and keywords
        query: String,

        /// Print machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Open a settings module
    Open {
        /// Module id (e.g. kcm_bluetooth) or a query matching exactly one module
        module: String,

        /// Give up on the launch after this many seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Skip desktop notifications
        #[arg(long)]
        quiet: bool,
    },
}

/// How a user-supplied module argument maps onto the index.
enum Resolution<'a> {
    One(&'a ModuleEntry),
    NotFound,
    Ambiguous(Vec<&'a ModuleEntry>),
}

/// Parse the command line and run the requested command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load();
    let index = ModuleIndex::with_origins(&config.origins());

    match cli.command {
        Commands::List { json } => {
            let modules: Vec<&ModuleEntry> = index.entries().iter().collect();
            print_modules(&modules, json)
        }
        Commands::Search { query, json } => print_modules(&index.search(&query), json),
        Commands::Open {
            module,
            timeout,
            quiet,
        } => {
            let timeout = timeout.map(Duration::from_secs).unwrap_or_else(|| config.timeout());
            let launcher = if quiet || !config.launch.notify {
                ModuleLauncher::silent(timeout)
            } else {
                ModuleLauncher::new(timeout)
            };

            match resolve(&index, &module) {
                Resolution::One(entry) => {
                    launcher.open(entry).await?;
                    println!("Opened {}", entry.name);
                    Ok(())
                }
                Resolution::NotFound => {
                    anyhow::bail!("no settings module matches '{}'", module)
                }
                Resolution::Ambiguous(candidates) => {
                    eprintln!("'{}' matches more than one module:", module);
                    for entry in &candidates {
                        eprintln!("  {:<32} {}", entry.id, entry.name);
                    }
                    anyhow::bail!("pass a module id to pick one")
                }
            }
        }
    }
}

/// Resolve `needle` against the index: exact id first, then a search that
/// must name exactly one module.
fn resolve<'a>(index: &'a ModuleIndex, needle: &str) -> Resolution<'a> {
    if let Some(entry) = index.find(needle) {
        return Resolution::One(entry);
    }

    let mut matches = index.search(needle);
    match matches.len() {
        0 => Resolution::NotFound,
        1 => Resolution::One(matches.remove(0)),
        _ => Resolution::Ambiguous(matches),
    }
}

fn print_modules(modules: &[&ModuleEntry], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(modules)?);
        return Ok(());
    }

    for module in modules {
        println!("{:<32} {}", module.id, module.name);
    }
    Ok(())
}
