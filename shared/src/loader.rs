//! Async glue between an [`ArticleSource`] and the view-state types.
//!
//! Failures never escape as errors here: they are logged and turned into an
//! empty or unchanged result, which is all the views ever render. Feed state
//! lives in a `RefCell` and is never borrowed across an `.await`.

use std::cell::RefCell;

use futures::future::join_all;

use crate::{
    article_feed::{ArticleFeed, FetchKind, FetchTicket},
    cache::{AuthorCache, KeyValueStore},
    endpoints::ArticleQuery,
    error::FetchError,
    models::{Article, Author, AuthorRef},
    source::ArticleSource,
};

/// Where a loaded author collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorOrigin {
    /// Served from the persistent cache; no request was made.
    Cache,
    /// Fetched and enriched from the API, then cached.
    Network,
    /// The author collection could not be fetched; the list is empty.
    Unavailable,
}

/// Result of [`load_authors`].
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorLoad {
    /// Enriched authors, empty when unavailable.
    pub authors: Vec<Author>,
    /// Cache hit, network or failure.
    pub origin: AuthorOrigin,
}

/// Fill `last_article` / `article_count` for every author concurrently. A
/// failed lookup leaves that author without an article and does not affect
/// the others.
pub async fn enrich_authors(source: &dyn ArticleSource, authors: Vec<Author>) -> Vec<Author> {
    let query = ArticleQuery::latest_first();
    join_all(
        authors
            .into_iter()
            .map(|author| enrich_author(source, author, &query)),
    )
    .await
}

async fn enrich_author(
    source: &dyn ArticleSource,
    mut author: Author,
    query: &ArticleQuery,
) -> Author {
    match source.articles_by_author(&author.id, query).await {
        Ok(articles) => {
            author.article_count = Some(articles.len());
            author.last_article = articles.into_iter().next();
        },
        Err(err) => {
            tracing::warn!("Error fetching articles for author {}: {err}", author.id);
            author.last_article = None;
            author.article_count = None;
        },
    }
    author.fill_placeholders();
    author
}

/// Authors from the cache when it holds a fresh entry, otherwise fetched,
/// enriched and written back.
pub async fn load_authors<S: KeyValueStore + ?Sized>(
    source: &dyn ArticleSource,
    cache: &AuthorCache<'_, S>,
    now_ms: i64,
) -> AuthorLoad {
    if let Some(authors) = cache.load(now_ms) {
        tracing::debug!("Serving {} authors from cache", authors.len());
        return AuthorLoad {
            authors,
            origin: AuthorOrigin::Cache,
        };
    }
    refresh_authors(source, cache, now_ms).await
}

/// Skip the cache read, fetch and enrich, then overwrite the cache.
pub async fn refresh_authors<S: KeyValueStore + ?Sized>(
    source: &dyn ArticleSource,
    cache: &AuthorCache<'_, S>,
    now_ms: i64,
) -> AuthorLoad {
    let authors = match source.authors().await {
        Ok(authors) => authors,
        Err(err) => {
            tracing::warn!("Error fetching authors: {err}");
            return AuthorLoad {
                authors: Vec::new(),
                origin: AuthorOrigin::Unavailable,
            };
        },
    };
    let authors = enrich_authors(source, authors).await;
    if let Err(err) = cache.save(&authors, now_ms) {
        tracing::warn!("Could not cache authors: {err}");
    }
    AuthorLoad {
        authors,
        origin: AuthorOrigin::Network,
    }
}

/// Profile for card augmentation; `None` when it cannot be fetched.
pub async fn fetch_author_profile(source: &dyn ArticleSource, author_id: &str) -> Option<Author> {
    match source.author(author_id).await {
        Ok(author) => Some(author),
        Err(err) => {
            tracing::warn!("Error fetching author details for {author_id}: {err}");
            None
        },
    }
}

/// What happened to a feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOutcome {
    /// Result merged into the feed.
    Applied,
    /// Result arrived after the feed moved on and was dropped.
    Stale,
    /// Request failed; the feed is unchanged.
    Failed(FetchError),
    /// The feed refused to issue a request (in flight or author-scoped).
    Skipped,
}

impl FeedOutcome {
    /// Whether the feed changed and needs a redraw.
    pub fn is_applied(&self) -> bool {
        matches!(self, FeedOutcome::Applied)
    }
}

/// Perform the request a ticket stands for.
pub async fn fetch_for_ticket(
    source: &dyn ArticleSource,
    ticket: &FetchTicket,
) -> Result<Vec<Article>, FetchError> {
    match ticket.kind() {
        FetchKind::FirstPage { limit } => source.articles_page(1, *limit).await,
        FetchKind::NextPage { page, limit } => source.articles_page(*page, *limit).await,
        FetchKind::Author { author_id } => {
            source
                .articles_by_author(author_id, &ArticleQuery::default())
                .await
        },
    }
}

/// Fetch for `ticket` and merge the result, unless it went stale meanwhile.
pub async fn run_ticket(
    feed: &RefCell<ArticleFeed>,
    source: &dyn ArticleSource,
    ticket: FetchTicket,
) -> FeedOutcome {
    let result = fetch_for_ticket(source, &ticket).await;
    let mut feed = feed.borrow_mut();
    match result {
        Ok(articles) => {
            if feed.apply(&ticket, articles) {
                FeedOutcome::Applied
            } else {
                FeedOutcome::Stale
            }
        },
        Err(err) => {
            tracing::warn!("Error fetching {:?}: {err}", ticket.kind());
            feed.fail(&ticket);
            FeedOutcome::Failed(err)
        },
    }
}

/// Page 1 of the global feed, unless an author is selected.
pub async fn load_initial(feed: &RefCell<ArticleFeed>, source: &dyn ArticleSource) -> FeedOutcome {
    let ticket = feed.borrow_mut().begin_initial();
    match ticket {
        Some(ticket) => run_ticket(feed, source, ticket).await,
        None => FeedOutcome::Skipped,
    }
}

/// Append the next global page. Overlapping calls issue a single request.
pub async fn load_more(feed: &RefCell<ArticleFeed>, source: &dyn ArticleSource) -> FeedOutcome {
    let ticket = feed.borrow_mut().begin_load_more();
    match ticket {
        Some(ticket) => run_ticket(feed, source, ticket).await,
        None => FeedOutcome::Skipped,
    }
}

/// Switch to author-scoped mode and replace the sequence.
pub async fn load_for_author(
    feed: &RefCell<ArticleFeed>,
    source: &dyn ArticleSource,
    author: AuthorRef,
) -> FeedOutcome {
    let ticket = feed.borrow_mut().select_author(author);
    run_ticket(feed, source, ticket).await
}

/// Back to the page-1 global feed.
pub async fn reset_feed(feed: &RefCell<ArticleFeed>, source: &dyn ArticleSource) -> FeedOutcome {
    let ticket = feed.borrow_mut().reset();
    run_ticket(feed, source, ticket).await
}
