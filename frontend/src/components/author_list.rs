use byline_shared::{
    loader::{load_authors, AuthorOrigin},
    Author, AuthorCache, AuthorListState, AuthorRef,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api::GlooSource,
    components::loading_spinner::LoadingSpinner,
    storage::{now_ms, LocalStorageStore},
};

#[derive(Properties, PartialEq)]
pub struct AuthorListProps {
    /// Fired when an author's name or avatar is clicked.
    pub on_select: Callback<AuthorRef>,
    /// Fired by the "show all" button after the list itself has reset.
    pub on_show_all: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct AuthorCardProps {
    author: Author,
    hidden: bool,
    on_select: Callback<String>,
}

// Tailwind's `.flex` outranks the UA `[hidden]` rule, so hiding goes
// through the `hidden` utility class.
fn author_card_classes(hidden: bool) -> Classes {
    classes!(
        "author-card", "relative", "bg-white", "shadow-md", "rounded-lg", "p-4", "max-w-sm",
        "flex", "items-center", "gap-4",
        hidden.then_some("hidden")
    )
}

fn load_more_classes(has_more: bool) -> Classes {
    classes!("flex", "justify-center", "mt-4", (!has_more).then_some("hidden"))
}

#[function_component(AuthorCard)]
fn author_card(props: &AuthorCardProps) -> Html {
    let author = &props.author;
    let onclick = {
        let on_select = props.on_select.clone();
        let id = author.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    html! {
        <div class={author_card_classes(props.hidden)}>
            <img
                class={classes!("author-avatar", "w-12", "h-12", "rounded-full", "cursor-pointer")}
                src={author.avatar.clone()}
                alt={format!("{} Avatar", author.name)}
                onclick={onclick.clone()}
            />
            <div class={classes!("font-medium")}>
                <div class={classes!("author-name", "text-blue-500", "underline", "cursor-pointer")} {onclick}>
                    { &author.name }
                </div>
                <div class={classes!("text-sm", "text-gray-500")}>
                    { format!("Birthdate: {}", author.display_birthdate()) }
                </div>
                <div class={classes!("text-sm", "text-gray-500")}>
                    { format!("Bio: {}", author.display_bio()) }
                </div>
            </div>
        </div>
    }
}

#[function_component(AuthorList)]
pub fn author_list(props: &AuthorListProps) -> Html {
    let state = use_mut_ref(AuthorListState::default);
    let redraw = use_force_update();

    {
        let state = state.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let store = LocalStorageStore;
                let cache = AuthorCache::new(&store);
                let load = load_authors(&GlooSource::default(), &cache, now_ms()).await;
                if load.origin == AuthorOrigin::Unavailable {
                    web_sys::console::error_1(&"Error fetching authors".into());
                }
                state.borrow_mut().hydrate(load.authors);
                redraw.force_update();
            });
            || ()
        });
    }

    // Only the card list re-renders; the search box keeps its focus.
    let oninput = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            state.borrow_mut().filter(&input.value());
            redraw.force_update();
        })
    };

    let on_card_select = {
        let state = state.clone();
        let redraw = redraw.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |author_id: String| {
            let selected = state.borrow_mut().select(&author_id);
            if let Some(author) = selected {
                redraw.force_update();
                on_select.emit(author);
            }
        })
    };

    let on_show_all = {
        let state = state.clone();
        let redraw = redraw.clone();
        let on_show_all = props.on_show_all.clone();
        Callback::from(move |_: MouseEvent| {
            state.borrow_mut().show_all();
            redraw.force_update();
            on_show_all.emit(());
        })
    };

    let on_load_more = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            state.borrow_mut().load_more();
            redraw.force_update();
        })
    };

    let view = state.borrow();
    let cards = if view.is_loading() {
        html! { <LoadingSpinner /> }
    } else {
        html! {
            <>{ for view.visible().iter().map(|author| html! {
                <AuthorCard
                    key={author.id.clone()}
                    author={author.clone()}
                    hidden={view.is_hidden(&author.id)}
                    on_select={on_card_select.clone()}
                />
            }) }</>
        }
    };

    html! {
        <section class={classes!("authors-section", "p-4")}>
            <div class={classes!("flex", "justify-center", "gap-4", "mb-4")}>
                <input
                    id="search-input"
                    type="search"
                    class={classes!("border", "rounded", "px-3", "py-2")}
                    placeholder="Search authors"
                    value={view.query().to_string()}
                    {oninput}
                />
                <button class={classes!("home-button", "px-4", "py-2", "rounded", "bg-gray-200")} onclick={on_show_all}>
                    { "Show all" }
                </button>
            </div>
            <div class={classes!("author-list", "flex", "flex-wrap", "justify-center", "items-center", "gap-4")}>
                { cards }
            </div>
            <div class={load_more_classes(view.has_more())}>
                <button class={classes!("load-more", "px-4", "py-2", "rounded", "bg-blue-600", "text-white")} onclick={on_load_more}>
                    { "Load more" }
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::{author_card_classes, load_more_classes};

    #[test]
    fn hidden_author_card_carries_hidden_class() {
        assert!(author_card_classes(true).contains("hidden"));
        assert!(author_card_classes(true).contains("flex"));
        assert!(!author_card_classes(false).contains("hidden"));
    }

    #[test]
    fn load_more_is_hidden_once_everything_is_shown() {
        assert!(load_more_classes(false).contains("hidden"));
        assert!(!load_more_classes(true).contains("hidden"));
    }
}
