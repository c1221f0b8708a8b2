use citysuggest_core::config::{DEFAULT_ENDPOINT, DEFAULT_LIMIT, DEFAULT_MIN_QUERY_LEN};
use citysuggest_core::SuggestConfig;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citysuggest-cli
#[derive(Debug, Parser)]
#[command(
    name = "citysuggest",
    version,
    about = "Run the city-name autocomplete flow from the terminal"
)]
pub struct CliArgs {
    /// Place-search endpoint (Nominatim-compatible /search)
    #[arg(short = 'e', long = "endpoint", global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Maximum number of candidates to request
    #[arg(short = 'l', long = "limit", global = true, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Minimum trimmed query length before a request is issued
    #[arg(long = "min-len", global = true, default_value_t = DEFAULT_MIN_QUERY_LEN)]
    pub min_len: usize,

    /// User-Agent sent with requests
    #[arg(long = "user-agent", global = true)]
    pub user_agent: Option<String>,

    /// More output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query the service and print the suggestions the widget would show
    Suggest {
        /// Text as typed into the input field
        query: String,
    },

    /// Print the request URL the widget would issue
    Url {
        /// Text as typed into the input field
        query: String,
    },

    /// Derive suggestions from a saved JSON response (use - for stdin)
    Parse {
        /// Path to a JSON array of places
        file: PathBuf,
    },
}

impl CliArgs {
    pub fn config(&self) -> SuggestConfig {
        let mut config = SuggestConfig::default()
            .with_endpoint(self.endpoint.clone())
            .with_limit(self.limit);
        config.min_query_len = self.min_len;
        if let Some(ua) = &self.user_agent {
            config.user_agent = Some(ua.clone());
        }
        config
    }
}
