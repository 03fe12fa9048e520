//! Wire types for the mock API: articles, authors and the selection payload.

use serde::{Deserialize, Deserializer, Serialize};

use crate::format::{self, BIO_LIMIT};

/// Placeholder rendered for an author's missing birthdate or bio.
pub const UNAVAILABLE: &str = "No disponible";

/// One article as served by `/articles` and `/users/{id}/articles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article id (the mock API serves string ids).
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Headline.
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    /// Lead paragraph; truncated on compact cards.
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    /// Full body, only shown on expanded cards.
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
    /// Hero image URL.
    #[serde(default, deserialize_with = "nullable_string")]
    pub image: String,
    /// Publisher shown above the expanded headline.
    #[serde(default, deserialize_with = "nullable_string")]
    pub company: String,
    /// ISO-like publication timestamp, passed verbatim to
    /// [`format::format_date`].
    #[serde(default)]
    pub published_at: Option<String>,
    /// Id of the owning author.
    #[serde(default, deserialize_with = "nullable_id_string")]
    pub user_id: String,
}

impl Article {
    /// Parse a serialized article, logging and returning `None` on malformed
    /// input.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(article) => Some(article),
            Err(err) => {
                tracing::warn!("Error parsing article JSON: {err}");
                None
            },
        }
    }

    /// Serialize for hand-off to another view or to stdout.
    pub fn to_json(&self) -> String {
        // Every field is a plain string/option; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// An author from `/users`, optionally enriched with their latest article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Author id.
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Display name, also the search key.
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    /// Avatar URL.
    #[serde(default, deserialize_with = "nullable_string")]
    pub avatar: String,
    /// Birthdate as served, or [`UNAVAILABLE`] after enrichment.
    #[serde(default, deserialize_with = "nullable_string")]
    pub birthdate: String,
    /// Bio as served, or [`UNAVAILABLE`] after enrichment.
    #[serde(default, deserialize_with = "nullable_string")]
    pub bio: String,
    /// Most recent article, filled by enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_article: Option<Article>,
    /// Number of articles, filled by enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_count: Option<usize>,
}

impl Author {
    /// Replace blank birthdate/bio with [`UNAVAILABLE`].
    pub fn fill_placeholders(&mut self) {
        if self.birthdate.trim().is_empty() {
            self.birthdate = UNAVAILABLE.to_string();
        }
        if self.bio.trim().is_empty() {
            self.bio = UNAVAILABLE.to_string();
        }
    }

    /// Bio as shown on an author card.
    pub fn display_bio(&self) -> String {
        if self.bio.trim().is_empty() {
            return UNAVAILABLE.to_string();
        }
        format::truncate(&self.bio, BIO_LIMIT).into_owned()
    }

    /// Birthdate as shown on an author card.
    pub fn display_birthdate(&self) -> String {
        format::format_birthdate(&self.birthdate)
    }

    /// The selection payload handed to the article list.
    pub fn to_ref(&self) -> AuthorRef {
        AuthorRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Typed "author selected" signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorRef {
    /// Author id used for `/users/{id}/articles`.
    pub id: String,
    /// Name shown as the article list heading.
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn nullable_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{Article, Author, UNAVAILABLE};

    #[test]
    fn article_decodes_mock_api_shape() {
        let raw = r#"{
            "id": "7",
            "userId": "2",
            "title": "Rust in production",
            "description": "short",
            "content": "long body",
            "image": "http://img",
            "company": "ACME",
            "publishedAt": "2020-11-17T19:48:15.337Z"
        }"#;
        let article = Article::from_json(raw).expect("valid article");
        assert_eq!(article.id, "7");
        assert_eq!(article.user_id, "2");
        assert_eq!(article.published_at.as_deref(), Some("2020-11-17T19:48:15.337Z"));
    }

    #[test]
    fn article_accepts_numeric_ids_and_null_fields() {
        let article = Article::from_json(r#"{"id": 3, "userId": 9, "title": null}"#)
            .expect("numeric ids are accepted");
        assert_eq!(article.id, "3");
        assert_eq!(article.user_id, "9");
        assert_eq!(article.title, "");
        assert!(article.published_at.is_none());
    }

    #[test]
    fn malformed_article_is_none() {
        assert!(Article::from_json("{not json").is_none());
        assert!(Article::from_json(r#"{"title": "no id"}"#).is_none());
    }

    #[test]
    fn author_placeholders_fill_blank_fields_only() {
        let mut author: Author =
            serde_json::from_str(r#"{"id": "1", "name": "Ada", "bio": "  ", "birthdate": null}"#)
                .expect("valid author");
        author.fill_placeholders();
        assert_eq!(author.bio, UNAVAILABLE);
        assert_eq!(author.birthdate, UNAVAILABLE);
        assert_eq!(author.display_bio(), UNAVAILABLE);
        assert_eq!(author.display_birthdate(), UNAVAILABLE);
    }

    #[test]
    fn author_bio_is_truncated_to_fifty_chars() {
        let author = Author {
            id: "1".to_string(),
            name: "Ada".to_string(),
            avatar: String::new(),
            birthdate: "1990-02-03T00:00:00.000Z".to_string(),
            bio: "b".repeat(60),
            last_article: None,
            article_count: None,
        };
        assert_eq!(author.display_bio(), format!("{}...", "b".repeat(50)));
        assert_eq!(author.display_birthdate(), "3 de feb. de 1990");
        assert_eq!(author.to_ref().name, "Ada");
    }
}
