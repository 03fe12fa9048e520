//! `reqwest` implementation of [`ArticleSource`].

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use byline_shared::{
    endpoints::{self, ArticleQuery},
    source::decode_body,
    Article, ArticleSource, Author, FetchError,
};
use serde::de::DeserializeOwned;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fetches from the mock API over native HTTP.
#[derive(Debug, Clone)]
pub struct ReqwestSource {
    client: reqwest::Client,
    base: String,
}

impl ReqwestSource {
    /// Client for the API rooted at `base`.
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            client,
            base: base.into(),
        })
    }

    /// API base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        decode_body(&body)
    }
}

#[async_trait(?Send)]
impl ArticleSource for ReqwestSource {
    async fn articles_page(&self, page: u32, limit: u32) -> Result<Vec<Article>, FetchError> {
        self.get_json(&endpoints::articles_page_url(&self.base, page, limit))
            .await
    }

    async fn articles_by_author(
        &self,
        author_id: &str,
        query: &ArticleQuery,
    ) -> Result<Vec<Article>, FetchError> {
        self.get_json(&endpoints::articles_by_author_url(&self.base, author_id, query))
            .await
    }

    async fn authors(&self) -> Result<Vec<Author>, FetchError> {
        self.get_json(&endpoints::authors_url(&self.base)).await
    }

    async fn author(&self, author_id: &str) -> Result<Author, FetchError> {
        self.get_json(&endpoints::author_url(&self.base, author_id))
            .await
    }
}
