use clap::{Parser, Subcommand};
use restatlas_core::Continent;

/// CLI arguments for restatlas
#[derive(Debug, Parser)]
#[command(
    name = "restatlas",
    version,
    about = "Browse and search the REST Countries directory from your terminal"
)]
pub struct CliArgs {
    /// Path to a local JSON snapshot of the directory (skips the network fetch)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the directory, optionally restricted to one continent
    List {
        /// Continent to restrict to (Africa, Americas, Asia, Europe, Oceania, Antarctic)
        #[arg(short, long)]
        continent: Option<Continent>,
    },

    /// Search countries by name (warns when nothing matches)
    Search {
        /// Substring to match against country names (case-insensitive)
        term: String,

        /// Continent to restrict to
        #[arg(short, long)]
        continent: Option<Continent>,
    },

    /// Show the detail card for one country
    Show {
        /// Country name or cca3 code (e.g. Peru, PER)
        query: String,
    },
}
