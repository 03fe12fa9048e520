//! Data model, formatting and view-state machines shared by the Byline
//! frontend (WASM) and the native `byline-cli`.
//!
//! Nothing in here touches the DOM or a concrete HTTP client: components own
//! an [`ArticleSource`] and a [`cache::KeyValueStore`] and feed results into
//! the state types below.

pub mod article_card;
pub mod article_feed;
pub mod author_list;
pub mod cache;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod loader;
pub mod models;
pub mod source;

pub use article_card::{CardMode, CardView};
pub use article_feed::{ArticleFeed, FeedMode, FetchKind, FetchTicket};
pub use author_list::AuthorListState;
pub use cache::{AuthorCache, KeyValueStore, MemoryStore};
pub use endpoints::{ArticleQuery, SortOrder};
pub use error::{CacheError, FetchError};
pub use models::{Article, Author, AuthorRef};
pub use source::ArticleSource;
