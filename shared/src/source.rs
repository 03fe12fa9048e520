//! The data-access seam between views and an HTTP client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    endpoints::ArticleQuery,
    error::FetchError,
    models::{Article, Author},
};

/// Read-only access to the mock API.
///
/// `?Send` so the browser implementation, whose futures hold JS handles, can
/// implement it too.
#[async_trait(?Send)]
pub trait ArticleSource {
    /// `GET /articles?page=&limit=`
    async fn articles_page(&self, page: u32, limit: u32) -> Result<Vec<Article>, FetchError>;

    /// `GET /users/{id}/articles`
    async fn articles_by_author(
        &self,
        author_id: &str,
        query: &ArticleQuery,
    ) -> Result<Vec<Article>, FetchError>;

    /// `GET /users`
    async fn authors(&self) -> Result<Vec<Author>, FetchError>;

    /// `GET /users/{id}`
    async fn author(&self, author_id: &str) -> Result<Author, FetchError>;
}

/// Decode a response body, mapping anything that is not the expected JSON to
/// [`FetchError::Decode`].
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::decode_body;
    use crate::{error::FetchError, models::Article};

    #[test]
    fn html_body_is_a_decode_error() {
        let err = decode_body::<Vec<Article>>("<html>oops</html>").expect_err("not json");
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn mockapi_not_found_string_is_a_decode_error() {
        // mockapi answers `"Not found"` for unknown collections.
        let err = decode_body::<Vec<Article>>("\"Not found\"").expect_err("not a list");
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
