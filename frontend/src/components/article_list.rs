use std::{cell::RefCell, rc::Rc};

use byline_shared::{
    loader::{run_ticket, FeedOutcome},
    ArticleFeed, AuthorRef, CardMode, FetchTicket,
};
use yew::prelude::*;

use crate::{
    api::GlooSource,
    components::{
        article_card::ArticleCard,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::use_infinite_scroll,
};

#[derive(Properties, PartialEq)]
pub struct ArticleListProps {
    /// Author whose articles are shown; `None` is the global feed.
    #[prop_or_default]
    pub selected_author: Option<AuthorRef>,
    /// Bumped by "show all" to drop back to page 1 of the global feed.
    #[prop_or_default]
    pub reset_epoch: u32,
}

fn spawn_fetch(feed: Rc<RefCell<ArticleFeed>>, redraw: UseForceUpdateHandle, ticket: FetchTicket) {
    redraw.force_update();
    wasm_bindgen_futures::spawn_local(async move {
        match run_ticket(&feed, &GlooSource::default(), ticket).await {
            FeedOutcome::Applied => redraw.force_update(),
            FeedOutcome::Failed(err) => {
                web_sys::console::error_1(&format!("Error fetching articles: {}", err).into());
                redraw.force_update();
            },
            FeedOutcome::Stale | FeedOutcome::Skipped => {},
        }
    });
}

#[function_component(ArticleList)]
pub fn article_list(props: &ArticleListProps) -> Html {
    let feed = use_mut_ref(ArticleFeed::default);
    let last_epoch = use_mut_ref(|| 0u32);
    let redraw = use_force_update();

    // Mount, author switch and "show all" all funnel through here.
    {
        let feed = feed.clone();
        let redraw = redraw.clone();
        use_effect_with(
            (props.selected_author.clone(), props.reset_epoch),
            move |(author, epoch)| {
                let ticket = {
                    let mut state = feed.borrow_mut();
                    let epoch_changed = *epoch != *last_epoch.borrow();
                    let scoped = state.selected_author().is_some();
                    match author {
                        Some(author) => Some(state.select_author(author.clone())),
                        None if epoch_changed || scoped => {
                            Some(state.reset())
                        },
                        None => state.begin_initial(),
                    }
                };
                *last_epoch.borrow_mut() = *epoch;
                if let Some(ticket) = ticket {
                    spawn_fetch(feed, redraw, ticket);
                }
                || ()
            },
        );
    }

    // Late results after unmount are dropped.
    {
        let feed = feed.clone();
        use_effect_with((), move |_| move || feed.borrow_mut().cancel());
    }

    let on_near_bottom = {
        let feed = feed.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            let ticket = feed.borrow_mut().begin_load_more();
            if let Some(ticket) = ticket {
                spawn_fetch(feed.clone(), redraw.clone(), ticket);
            }
        })
    };
    use_infinite_scroll(on_near_bottom);

    let on_expand = {
        let feed = feed.clone();
        let redraw = redraw.clone();
        Callback::from(move |article_id: String| {
            if feed.borrow_mut().focus(&article_id) {
                redraw.force_update();
            }
        })
    };

    let state = feed.borrow();
    let heading = state
        .selected_author()
        .map(|author| html! { <h2 class={classes!("text-2xl", "font-bold", "text-center", "mt-4")}>{ &author.name }</h2> })
        .unwrap_or_default();

    // Pages are appended without dedup, so ids alone are not unique keys.
    let cards = state.articles().iter().enumerate().map(|(index, article)| {
        let expanded = state.is_expanded(&article.id);
        let mode = if expanded { CardMode::Expanded } else { CardMode::Compact };
        let author_id = expanded.then(|| AttrValue::from(article.user_id.clone()));
        html! {
            <ArticleCard
                key={format!("{}-{}", index, article.id)}
                article={article.clone()}
                {mode}
                hidden={state.is_hidden(&article.id)}
                {author_id}
                on_expand={on_expand.clone()}
            />
        }
    });

    html! {
        <section class={classes!("articles-list-section")}>
            { heading }
            <div class={classes!("articles-list", "p-4", "flex", "flex-row", "justify-center", "items-center", "gap-5", "flex-wrap")}>
                { for cards }
            </div>
            {
                if state.is_loading() {
                    html! { <LoadingSpinner size={SpinnerSize::Large} /> }
                } else {
                    Html::default()
                }
            }
        </section>
    }
}
