use std::{cell::RefCell, io::Write};

use anyhow::Result;
use byline_shared::{
    loader::{load_initial, load_more},
    ArticleFeed, ArticleSource, CardView,
};

use super::ensure_applied;
use crate::render::{self, RULE};

pub async fn run(
    source: &dyn ArticleSource,
    pages: u32,
    page_size: u32,
    out: &mut dyn Write,
) -> Result<()> {
    let feed = RefCell::new(ArticleFeed::with_page_size(page_size));
    ensure_applied(load_initial(&feed, source).await)?;

    for _ in 1..pages {
        let before = feed.borrow().articles().len();
        ensure_applied(load_more(&feed, source).await)?;
        if feed.borrow().articles().len() == before {
            tracing::info!("Feed exhausted at page {}", feed.borrow().current_page());
            break;
        }
    }

    let feed = feed.into_inner();
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
