use std::io::Write;

use anyhow::{bail, Result};
use byline_shared::{
    loader::{load_authors, refresh_authors, AuthorOrigin},
    ArticleSource, AuthorCache, AuthorListState, KeyValueStore,
};

use super::now_ms;
use crate::render::{self, RULE};

pub async fn run(
    source: &dyn ArticleSource,
    store: &dyn KeyValueStore,
    query: Option<&str>,
    more: usize,
    refresh: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let cache = AuthorCache::new(store);
    let load = if refresh {
        refresh_authors(source, &cache, now_ms()).await
    } else {
        load_authors(source, &cache, now_ms()).await
    };
    if load.origin == AuthorOrigin::Unavailable {
        bail!("authors are unavailable");
    }
    tracing::info!("Loaded {} authors ({:?})", load.authors.len(), load.origin);

    let mut state = AuthorListState::default();
    state.hydrate(load.authors);
    if let Some(query) = query {
        state.filter(query);
    }
    for _ in 0..more {
        if !state.has_more() {
            break;
        }
        state.load_more();
    }

    if state.visible().is_empty() {
        writeln!(out, "No authors found.")?;
        return Ok(());
    }
    for author in state.visible() {
        write!(out, "{}", render::author_card(author))?;
        writeln!(out, "{RULE}")?;
    }
    if state.has_more() {
        let hidden = state.displayed().len() - state.visible().len();
        writeln!(out, "{hidden} more; rerun with --more {} to show them.", more + 1)?;
    }
    Ok(())
}
