//! citysuggest: the autocomplete flow, without a browser
//!
//! Runs exactly what the widget does on a keystroke and prints the list it
//! would render. Handy for checking an endpoint or a saved payload.
//!
//! Usage examples
//! --------------
//!
//! - Suggestions for what a user typed
//!   $ citysuggest suggest ber
//!
//! - The request the widget would send
//!   $ citysuggest url "new york"
//!
//! - Suggestions from a saved response (or stdin with `-`)
//!   $ citysuggest parse response.json
//!   $ curl -s '...' | citysuggest parse -
//!
//! Logging goes to stderr; raise it with `-v` or `RUST_LOG=debug`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use citysuggest_core::{collect_city_names, parse_places, Query, SuggestConfig};
use clap::Parser;
use std::io::Read;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logger(args.verbose);

    let config = args.config();
    config.validate()?;

    match args.command {
        Commands::Suggest { query } => suggest(&query, config)?,

        Commands::Url { query } => match Query::parse(&query, config.min_query_len) {
            Some(q) => println!("{}", q.request_url(&config)?),
            None => println!(
                "Query '{}' is shorter than {} characters; no request would be sent.",
                query.trim(),
                config.min_query_len
            ),
        },

        Commands::Parse { file } => {
            let body = read_input(&file)?;
            let places = parse_places(&body)
                .with_context(|| format!("{} is not a JSON array of places", file.display()))?;
            print_names(&collect_city_names(&places));
        }
    }

    Ok(())
}

#[cfg(feature = "fetch")]
fn suggest(query: &str, config: SuggestConfig) -> anyhow::Result<()> {
    use citysuggest_core::{Controller, MemoryView, NominatimClient, ResponseOutcome};

    let client = NominatimClient::new(&config)?;
    let min_len = config.min_query_len;
    let mut controller = Controller::new(config, MemoryView::default());

    match controller.run_lookup(query, &client)? {
        None => println!(
            "Query '{}' is shorter than {min_len} characters; no request sent.",
            query.trim()
        ),
        Some(ResponseOutcome::Shown(_)) => print_names(&controller.view().entries),
        Some(ResponseOutcome::Empty) => println!("No cities found matching: {}", query.trim()),
        Some(ResponseOutcome::Failed | ResponseOutcome::Stale) => {
            bail!("lookup for '{}' failed", query.trim())
        }
    }
    Ok(())
}

#[cfg(not(feature = "fetch"))]
fn suggest(_query: &str, _config: SuggestConfig) -> anyhow::Result<()> {
    bail!("built without the 'fetch' feature; live lookups are unavailable")
}

fn print_names(names: &[String]) {
    if names.is_empty() {
        println!("No cities found.");
        return;
    }
    for name in names {
        println!("{name}");
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    let mut body = String::new();
    if path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut body)
            .context("reading stdin")?;
    } else {
        body = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
    }
    Ok(body)
}

fn init_logger(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
