use std::{cell::RefCell, io::Write};

use anyhow::{bail, Result};
use byline_shared::{
    loader::{fetch_author_profile, load_for_author, load_initial, load_more},
    ArticleFeed, ArticleSource, CardMode, CardView,
};

use super::{author_articles::author_ref, ensure_applied};
use crate::render;

pub async fn run(
    source: &dyn ArticleSource,
    article_id: &str,
    author_id: Option<&str>,
    max_pages: u32,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let feed = RefCell::new(ArticleFeed::default());
    let mut profile = None;
    match author_id {
        Some(author_id) => {
            profile = fetch_author_profile(source, author_id).await;
            let author = author_ref(profile.as_ref(), author_id);
            ensure_applied(load_for_author(&feed, source, author).await)?;
        },
        None => scan_global_feed(&feed, source, article_id, max_pages).await?,
    }

    let mut feed = feed.into_inner();
    feed.focus(article_id);
    let Some(article) = feed
        .articles()
        .iter()
        .find(|article| feed.is_expanded(&article.id))
        .cloned()
    else {
        bail!("article {article_id} not found");
    };

    if json {
        writeln!(out, "{}", article.to_json())?;
        return Ok(());
    }

    // The profile fetched for `--author-id` is reused when it owns the article.
    let author = match profile.filter(|author| author.id == article.user_id) {
        Some(author) => Some(author),
        None => fetch_author_profile(source, &article.user_id).await,
    };
    let card = CardView::new(article)
        .with_mode(CardMode::Expanded)
        .with_author(author);
    write!(out, "{}", render::article_card(&card))?;
    Ok(())
}

/// Page through the global feed until `article_id` shows up, the feed runs
/// dry or `max_pages` pages have been read.
async fn scan_global_feed(
    feed: &RefCell<ArticleFeed>,
    source: &dyn ArticleSource,
    article_id: &str,
    max_pages: u32,
) -> Result<()> {
    ensure_applied(load_initial(feed, source).await)?;
    let contains = |feed: &RefCell<ArticleFeed>| {
        feed.borrow()
            .articles()
            .iter()
            .any(|article| article.id == article_id)
    };

    for _ in 1..max_pages {
        if contains(feed) {
            break;
        }
        let before = feed.borrow().articles().len();
        ensure_applied(load_more(feed, source).await)?;
        if feed.borrow().articles().len() == before {
            break;
        }
    }
    Ok(())
}
