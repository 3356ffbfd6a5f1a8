//! restatlas — command-line browser for the REST Countries directory
//!
//! Fetches the public country directory once on startup and lets you
//! browse it from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - List the whole directory
//!   $ restatlas list
//!
//! - List one continent
//!   $ restatlas list --continent Europe
//!
//! - Search by name (a committed search: an empty result prints a warning)
//!   $ restatlas search peru
//!   $ restatlas search stan --continent Asia
//!
//! - Show the detail card for a country, by name or cca3 code
//!   $ restatlas show peru
//!   $ restatlas show FRA
//!
//! Data source
//! -----------
//!
//! By default the CLI issues one GET against the fixed REST Countries
//! v3.1 endpoint. Use `--input <path>` to decode a local JSON snapshot
//! instead (no network). A failed fetch prints the error and exits
//! non-zero; there are no retries.

mod args;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use clap::Parser;
use restatlas_core::{classify, fetch, Country, FetchStatus, Notice, Session, COUNTRIES_API_URL};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    // One fetch per session; --input swaps the transport, not the logic.
    let status = match &args.input {
        Some(path) => FetchStatus::settle(fetch::countries_from_path(path)),
        None => FetchStatus::settle(fetch::fetch_countries(COUNTRIES_API_URL)),
    };
    if let Some(err) = &status.error {
        bail!("could not load the country directory: {err}");
    }

    let mut session = Session::new(status.countries);

    match args.command {
        Commands::List { continent } => {
            session.set_continent(continent);
            for country in session.filtered() {
                print_card_line(country);
            }
            println!("{} countries", session.filtered_len());
        }

        Commands::Search { term, continent } => {
            session.set_continent(continent);
            session.set_search_term(term);
            match session.commit_search() {
                Some(Notice::NotFound { term }) => {
                    println!("No country matched \"{term}\"");
                }
                None => {
                    for country in session.filtered() {
                        print_card_line(country);
                    }
                    println!("{} countries", session.filtered_len());
                }
            }
        }

        Commands::Show { query } => match session.select_named(&query) {
            Some(country) => print_detail(country),
            None => eprintln!("No country found for: {query}"),
        },
    }

    Ok(())
}

/// One card per line. The bracketed tag is the continent style tag the
/// card grid uses for coloring; unknown regions get an empty tag.
fn print_card_line(country: &Country) {
    println!(
        "[{:<9}] {} ({})  {}",
        classify(&country.region),
        country.common_name,
        country.cca3,
        country.capital.as_deref().unwrap_or("-")
    );
}

fn print_detail(country: &Country) {
    println!("{}", country.common_name);
    println!("{}", country.official_name);
    for line in country.detail_lines() {
        println!("  {line}");
    }
    println!("  Flag: {}", country.flag_svg);
}
