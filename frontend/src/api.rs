//! `gloo-net` implementation of [`ArticleSource`].

use async_trait::async_trait;
use byline_shared::{
    endpoints::{self, ArticleQuery},
    source::decode_body,
    Article, ArticleSource, Author, FetchError,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::config::API_BASE;

/// Fetches from the mock API through the browser's `fetch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlooSource {
    base: &'static str,
}

impl Default for GlooSource {
    fn default() -> Self {
        Self { base: API_BASE }
    }
}

impl GlooSource {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;
        decode_body(&body)
    }
}

#[async_trait(?Send)]
impl ArticleSource for GlooSource {
    async fn articles_page(&self, page: u32, limit: u32) -> Result<Vec<Article>, FetchError> {
        self.get_json(&endpoints::articles_page_url(self.base, page, limit))
            .await
    }

    async fn articles_by_author(
        &self,
        author_id: &str,
        query: &ArticleQuery,
    ) -> Result<Vec<Article>, FetchError> {
        self.get_json(&endpoints::articles_by_author_url(self.base, author_id, query))
            .await
    }

    async fn authors(&self) -> Result<Vec<Author>, FetchError> {
        self.get_json(&endpoints::authors_url(self.base)).await
    }

    async fn author(&self, author_id: &str) -> Result<Author, FetchError> {
        self.get_json(&endpoints::author_url(self.base, author_id))
            .await
    }
}
