//! Byline: browse mock-API authors and their articles.
//!
//! The author list drives the article list through the selection and
//! "show all" callbacks wired up in [`App`].

mod api;
mod components;
mod config;
mod hooks;
mod storage;

use byline_shared::AuthorRef;
use yew::prelude::*;

use crate::components::{article_list::ArticleList, author_list::AuthorList};

#[function_component(App)]
fn app() -> Html {
    let selected_author = use_state(|| None::<AuthorRef>);
    let reset_epoch = use_state(|| 0u32);

    let on_select = {
        let selected_author = selected_author.clone();
        Callback::from(move |author: AuthorRef| selected_author.set(Some(author)))
    };

    let on_show_all = {
        let selected_author = selected_author.clone();
        let reset_epoch = reset_epoch.clone();
        Callback::from(move |_: ()| {
            selected_author.set(None);
            reset_epoch.set(reset_epoch.wrapping_add(1));
        })
    };

    html! {
        <main class={classes!("byline", "min-h-screen", "bg-gray-100")}>
            <AuthorList {on_select} {on_show_all} />
            <ArticleList
                selected_author={(*selected_author).clone()}
                reset_epoch={*reset_epoch}
            />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
