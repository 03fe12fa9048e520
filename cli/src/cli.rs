//! Command-line arguments.

use std::path::PathBuf;

use byline_shared::{article_feed::DEFAULT_PAGE_SIZE, endpoints::DEFAULT_API_BASE};
use clap::{Parser, Subcommand};

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "byline", version, about = "Browse mock-API articles and authors")]
pub struct Cli {
    /// API base URL.
    #[arg(long, global = true, env = "BYLINE_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    /// JSON file holding the author cache.
    #[arg(long, global = true, default_value = "./.byline-cache.json")]
    pub cache_file: PathBuf,
    /// Keep the author cache in memory for this run only.
    #[arg(long, global = true)]
    pub no_cache: bool,
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List authors with their latest article.
    Authors {
        /// Case-insensitive name filter.
        #[arg(long)]
        query: Option<String>,
        /// Number of "load more" steps to apply.
        #[arg(long, default_value_t = 0)]
        more: usize,
        /// Ignore the cache and refetch.
        #[arg(long)]
        refresh: bool,
    },
    /// Print the paginated global article feed.
    Feed {
        /// Pages to load, counting the first.
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Articles per page.
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Print every article of one author.
    AuthorArticles {
        /// Author id.
        id: String,
    },
    /// Print one article as an expanded card.
    Article {
        /// Article id.
        id: String,
        /// Look the article up among this author's articles instead of the
        /// global feed.
        #[arg(long)]
        author_id: Option<String>,
        /// Global feed pages to scan before giving up.
        #[arg(long, default_value_t = 20)]
        max_pages: u32,
        /// Print the article as JSON.
        #[arg(long)]
        json: bool,
    },
}
