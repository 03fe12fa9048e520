//! View state of the article list: global paginated feed or author-scoped
//! mode, the load-more guard and the focused (expanded) card.
//!
//! Every request is issued through a [`FetchTicket`] stamped with the feed's
//! generation. Switching author, resetting or tearing the view down bumps the
//! generation, and [`ArticleFeed::apply`] drops any result carrying an older
//! one.

use crate::models::{Article, AuthorRef};

/// Articles requested per feed page.
pub const DEFAULT_PAGE_SIZE: u32 = 3;
/// Distance from the document bottom, in pixels, that triggers a load.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Whether the viewport is within [`SCROLL_THRESHOLD_PX`] of the bottom.
pub fn near_bottom(inner_height: f64, scroll_y: f64, body_height: f64) -> bool {
    inner_height + scroll_y >= body_height - SCROLL_THRESHOLD_PX
}

/// Which collection the feed is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedMode {
    /// `/articles`, paginated, infinite scroll enabled.
    Global,
    /// `/users/{id}/articles`, pagination disabled.
    AuthorScoped(AuthorRef),
}

/// The request a ticket stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    /// Page 1 of the global feed; replaces the sequence.
    FirstPage {
        /// Page size.
        limit: u32,
    },
    /// A later page of the global feed; appended.
    NextPage {
        /// Page number being fetched.
        page: u32,
        /// Page size.
        limit: u32,
    },
    /// Every article of one author; replaces the sequence.
    Author {
        /// Author being shown.
        author_id: String,
    },
}

/// Permission to apply one fetch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    kind: FetchKind,
}

impl FetchTicket {
    /// What to fetch.
    pub fn kind(&self) -> &FetchKind {
        &self.kind
    }

    /// Feed generation the ticket was issued under.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// State owned by the article list component.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleFeed {
    articles: Vec<Article>,
    mode: FeedMode,
    current_page: u32,
    page_size: u32,
    loading: bool,
    generation: u64,
    focused: Option<String>,
}

impl Default for ArticleFeed {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ArticleFeed {
    /// Empty global feed requesting `page_size` articles per page.
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            articles: Vec::new(),
            mode: FeedMode::Global,
            current_page: 1,
            page_size: page_size.max(1),
            loading: false,
            generation: 0,
            focused: None,
        }
    }

    /// Articles in display order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Global or author-scoped.
    pub fn mode(&self) -> &FeedMode {
        &self.mode
    }

    /// The author the feed is scoped to.
    pub fn selected_author(&self) -> Option<&AuthorRef> {
        match &self.mode {
            FeedMode::AuthorScoped(author) => Some(author),
            FeedMode::Global => None,
        }
    }

    /// Last page merged into the global feed.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Articles per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// A request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current generation; see [`FetchTicket`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Id of the expanded card, if any.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    fn issue(&mut self, kind: FetchKind) -> FetchTicket {
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            kind,
        }
    }

    /// Page 1 of the global feed. `None` while an author is selected or a
    /// request is already out.
    pub fn begin_initial(&mut self) -> Option<FetchTicket> {
        if self.loading || self.selected_author().is_some() {
            return None;
        }
        Some(self.issue(FetchKind::FirstPage {
            limit: self.page_size,
        }))
    }

    /// The next global page. `None` while a request is in flight or in
    /// author-scoped mode, so overlapping scroll events issue one request.
    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        if self.loading || self.selected_author().is_some() {
            return None;
        }
        Some(self.issue(FetchKind::NextPage {
            page: self.current_page + 1,
            limit: self.page_size,
        }))
    }

    /// Enter author-scoped mode. In-flight global requests become stale.
    pub fn select_author(&mut self, author: AuthorRef) -> FetchTicket {
        self.generation += 1;
        self.focused = None;
        let author_id = author.id.clone();
        self.mode = FeedMode::AuthorScoped(author);
        self.issue(FetchKind::Author { author_id })
    }

    /// Back to an empty page-1 global feed and request it again.
    pub fn reset(&mut self) -> FetchTicket {
        self.generation += 1;
        self.articles.clear();
        self.mode = FeedMode::Global;
        self.current_page = 1;
        self.focused = None;
        self.issue(FetchKind::FirstPage {
            limit: self.page_size,
        })
    }

    /// Invalidate every outstanding ticket, e.g. when the view goes away.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// Merge a successful result. Returns `false`, leaving state untouched,
    /// when the ticket is stale.
    pub fn apply(&mut self, ticket: &FetchTicket, articles: Vec<Article>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale {:?} result (generation {} != {})",
                ticket.kind,
                ticket.generation,
                self.generation
            );
            return false;
        }
        match &ticket.kind {
            FetchKind::FirstPage { .. } => {
                self.articles = articles;
                self.current_page = 1;
            },
            FetchKind::NextPage { page, .. } => {
                self.articles.extend(articles);
                self.current_page = *page;
            },
            FetchKind::Author { .. } => {
                self.articles = articles;
            },
        }
        self.loading = false;
        true
    }

    /// Record a failed request: the sequence is left as it was.
    pub fn fail(&mut self, ticket: &FetchTicket) {
        if ticket.generation == self.generation {
            self.loading = false;
        }
    }

    /// Expand `article_id` and hide the rest. The first expansion wins until
    /// the sequence is replaced.
    pub fn focus(&mut self, article_id: &str) -> bool {
        if self.focused.is_some() {
            return false;
        }
        self.focused = Some(article_id.to_string());
        true
    }

    /// Whether the card for `article_id` is expanded.
    pub fn is_expanded(&self, article_id: &str) -> bool {
        self.focused.as_deref() == Some(article_id)
    }

    /// Whether the card for `article_id` is hidden behind a focused sibling.
    pub fn is_hidden(&self, article_id: &str) -> bool {
        self.focused
            .as_deref()
            .is_some_and(|focused| focused != article_id)
    }
}
