//! Subcommand dispatch.

mod article;
mod author_articles;
mod authors;
mod feed;

use std::io::{self, Write};

use anyhow::{anyhow, bail, Result};
use byline_shared::{loader::FeedOutcome, ArticleSource, KeyValueStore, MemoryStore};

use crate::{
    cli::{Cli, Commands},
    source::ReqwestSource,
    store::FileStore,
};

/// Run the parsed command against the configured API, printing to stdout.
pub async fn run(cli: Cli) -> Result<()> {
    let source = ReqwestSource::new(cli.api_base)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.no_cache {
        execute(cli.command, &source, &MemoryStore::default(), &mut out).await
    } else {
        let store = FileStore::new(cli.cache_file);
        execute(cli.command, &source, &store, &mut out).await
    }
}

/// Run `command` with an explicit source, cache store and output sink.
pub async fn execute(
    command: Commands,
    source: &dyn ArticleSource,
    store: &dyn KeyValueStore,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Authors {
            query,
            more,
            refresh,
        } => authors::run(source, store, query.as_deref(), more, refresh, out).await,
        Commands::Feed {
            pages,
            page_size,
        } => feed::run(source, pages, page_size, out).await,
        Commands::AuthorArticles {
            id,
        } => author_articles::run(source, &id, out).await,
        Commands::Article {
            id,
            author_id,
            max_pages,
            json,
        } => article::run(source, &id, author_id.as_deref(), max_pages, json, out).await,
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn ensure_applied(outcome: FeedOutcome) -> Result<()> {
    match outcome {
        FeedOutcome::Applied => Ok(()),
        FeedOutcome::Failed(err) => Err(anyhow!(err).context("failed to fetch articles")),
        FeedOutcome::Stale | FeedOutcome::Skipped => bail!("article request was not applied"),
    }
}
