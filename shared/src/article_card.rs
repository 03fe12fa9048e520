//! One article card: compact or expanded, plus the optional author profile
//! merged in after the card is shown.

use std::borrow::Cow;

use crate::{
    format::{self, DESCRIPTION_LIMIT},
    models::{Article, Author},
};

/// Display state of a card. There is no way back from `Expanded`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardMode {
    /// Image, title, truncated description and date.
    #[default]
    Compact,
    /// Company, full description and content.
    Expanded,
}

/// Render model for one article card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    article: Article,
    mode: CardMode,
    author: Option<Author>,
}

impl CardView {
    /// Compact card without author details.
    pub fn new(article: Article) -> Self {
        Self {
            article,
            mode: CardMode::Compact,
            author: None,
        }
    }

    /// Card for a serialized article; `None` (render nothing) when it does
    /// not parse.
    pub fn from_json(raw: &str) -> Option<Self> {
        Article::from_json(raw).map(Self::new)
    }

    /// Start in `mode`.
    pub fn with_mode(mut self, mode: CardMode) -> Self {
        self.mode = mode;
        self
    }

    /// Attach an author profile, if one was fetched.
    pub fn with_author(mut self, author: Option<Author>) -> Self {
        self.author = author;
        self
    }

    /// The article shown.
    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Compact or expanded.
    pub fn mode(&self) -> CardMode {
        self.mode
    }

    /// Once expanded the card ignores further clicks.
    pub fn is_selected(&self) -> bool {
        self.mode == CardMode::Expanded
    }

    /// Handle a click. Returns `true` only for the Compact → Expanded
    /// transition, which is when the list must hide the siblings.
    pub fn expand(&mut self) -> bool {
        if self.is_selected() {
            return false;
        }
        self.mode = CardMode::Expanded;
        true
    }

    /// Merge a fetched author profile.
    pub fn set_author(&mut self, author: Author) {
        self.author = Some(author);
    }

    /// Author name, or `""` when no profile was merged.
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("", |author| author.name.as_str())
    }

    /// Author avatar, or `""` when no profile was merged.
    pub fn author_avatar(&self) -> &str {
        self.author.as_ref().map_or("", |author| author.avatar.as_str())
    }

    /// Truncated on compact cards, full on expanded ones.
    pub fn description(&self) -> Cow<'_, str> {
        match self.mode {
            CardMode::Compact => format::truncate(&self.article.description, DESCRIPTION_LIMIT),
            CardMode::Expanded => Cow::Borrowed(&self.article.description),
        }
    }

    /// Publication line, see [`format::format_date`].
    pub fn date_line(&self) -> String {
        format::format_date(self.article.published_at.as_deref())
    }
}
