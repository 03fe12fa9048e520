use std::{cell::RefCell, io::Write};

use anyhow::Result;
use byline_shared::{
    loader::{fetch_author_profile, load_for_author},
    ArticleFeed, ArticleSource, Author, AuthorRef, CardView,
};

use super::ensure_applied;
use crate::render::{self, RULE};

/// The selection payload for `author_id`, named from `profile` when it was
/// fetched.
pub(super) fn author_ref(profile: Option<&Author>, author_id: &str) -> AuthorRef {
    match profile {
        Some(author) => author.to_ref(),
        None => AuthorRef {
            id: author_id.to_string(),
            name: author_id.to_string(),
        },
    }
}

pub async fn run(source: &dyn ArticleSource, author_id: &str, out: &mut dyn Write) -> Result<()> {
    let profile = fetch_author_profile(source, author_id).await;
    let author = author_ref(profile.as_ref(), author_id);
    let feed = RefCell::new(ArticleFeed::default());
    ensure_applied(load_for_author(&feed, source, author).await)?;

    let feed = feed.into_inner();
    if let Some(author) = feed.selected_author() {
        writeln!(out, "{}", author.name)?;
        writeln!(out, "{RULE}")?;
    }
    if feed.articles().is_empty() {
        writeln!(out, "No articles.")?;
        return Ok(());
    }
    for article in feed.articles() {
        write!(out, "{}", render::article_card(&CardView::new(article.clone())))?;
        writeln!(out, "{RULE}")?;
    }
    Ok(())
}
