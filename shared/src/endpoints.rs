//! URL construction for the four read-only mock API endpoints.
//!
//! Both HTTP clients go through these helpers so the WASM and native sources
//! always hit the same paths.

/// Public mock API the widget was built against.
pub const DEFAULT_API_BASE: &str = "https://5fb46367e473ab0016a1654d.mockapi.io";

/// Sort direction for `order=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

impl SortOrder {
    fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Optional query for `/users/{id}/articles`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    /// `limit=`
    pub limit: Option<u32>,
    /// `sortBy=`
    pub sort_by: Option<String>,
    /// `order=`
    pub order: Option<SortOrder>,
}

impl ArticleQuery {
    /// Newest articles first; the first element is the author's latest.
    pub fn latest_first() -> Self {
        Self {
            limit: None,
            sort_by: Some("publishedAt".to_string()),
            order: Some(SortOrder::Desc),
        }
    }

    /// Render as `?k=v&...`, or an empty string when nothing is set.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        if let Some(sort_by) = self.sort_by.as_deref() {
            params.push(format!("sortBy={}", urlencoding::encode(sort_by)));
        }
        if let Some(order) = self.order {
            params.push(format!("order={}", order.as_str()));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// `{base}/articles?page={page}&limit={limit}`
pub fn articles_page_url(base: &str, page: u32, limit: u32) -> String {
    format!("{}/articles?page={page}&limit={limit}", trim_base(base))
}

/// `{base}/users/{id}/articles[?limit=&sortBy=&order=]`
pub fn articles_by_author_url(base: &str, author_id: &str, query: &ArticleQuery) -> String {
    format!(
        "{}/users/{}/articles{}",
        trim_base(base),
        urlencoding::encode(author_id),
        query.to_query_string()
    )
}

/// `{base}/users`
pub fn authors_url(base: &str) -> String {
    format!("{}/users", trim_base(base))
}

/// `{base}/users/{id}`
pub fn author_url(base: &str, author_id: &str) -> String {
    format!("{}/users/{}", trim_base(base), urlencoding::encode(author_id))
}
