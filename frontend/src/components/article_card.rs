use byline_shared::{loader::fetch_author_profile, Article, Author, CardMode, CardView};
use yew::prelude::*;

use crate::api::GlooSource;

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
    #[prop_or_default]
    pub mode: CardMode,
    #[prop_or(false)]
    pub hidden: bool,
    /// When set, the author's profile is fetched and shown on the card.
    #[prop_or_default]
    pub author_id: Option<AttrValue>,
    /// Fired with the article id on the Compact → Expanded click.
    pub on_expand: Callback<String>,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let author = use_state(|| None::<Author>);

    {
        let author = author.clone();
        use_effect_with(props.author_id.clone(), move |author_id| {
            if let Some(author_id) = author_id.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_author_profile(&GlooSource::default(), &author_id).await {
                        Some(profile) => author.set(Some(profile)),
                        None => web_sys::console::warn_1(
                            &format!("Error fetching author details for {}", author_id).into(),
                        ),
                    }
                });
            }
            || ()
        });
    }

    let card = CardView::new(props.article.clone())
        .with_mode(props.mode)
        .with_author((*author).clone());
    let article = card.article();
    let date_line = card.date_line();

    // Selected cards no longer react to clicks.
    let onclick = (!card.is_selected()).then(|| {
        let on_expand = props.on_expand.clone();
        let id = article.id.clone();
        Callback::from(move |_: MouseEvent| on_expand.emit(id.clone()))
    });

    let byline = if card.author_name().is_empty() {
        Html::default()
    } else {
        html! {
            <div class={classes!("flex", "items-center", "gap-2", "mb-3")}>
                <img class={classes!("w-8", "h-8", "rounded-full")} src={card.author_avatar().to_string()} alt={card.author_name().to_string()} />
                <span class={classes!("font-sans", "text-sm", "text-gray-700")}>{ card.author_name() }</span>
            </div>
        }
    };

    let body = match card.mode() {
        CardMode::Compact => html! {
            <div class={classes!("article-card", "max-w-xs", "bg-white", "rounded-lg", "cursor-pointer")} {onclick}>
                <img class={classes!("rounded-t-lg", "w-full")} src={article.image.clone()} alt={article.title.clone()} loading="lazy" />
                <div class={classes!("p-4")}>
                    <h1 class={classes!("font-sans", "font-bold", "text-xl", "text-gray-900")}>{ &article.title }</h1>
                    <p class={classes!("mb-2", "font-sans", "text-sm", "text-justify", "text-gray-600")}>{ card.description().into_owned() }</p>
                    <p class={classes!("pl-3", "font-sans", "text-xs", "text-gray-500")}>{ date_line }</p>
                </div>
            </div>
        },
        CardMode::Expanded => html! {
            <div class={classes!("article-card", "max-w-5xl", "bg-white", "rounded-lg", "p-4", "sm:p-6", "lg:p-8")}>
                <p class={classes!("font-sans", "font-semibold", "text-md", "text-blue-400")}>{ &article.company }</p>
                <h1 class={classes!("mb-1", "font-sans", "text-2xl", "sm:text-3xl", "lg:text-5xl", "text-gray-900")}>{ &article.title }</h1>
                <p class={classes!("mb-4", "font-sans", "text-md", "text-gray-400")}>{ date_line }</p>
                { byline }
                <div class={classes!("p-1")}>
                    <div class={classes!("flex", "justify-center")}>
                        <img class={classes!("rounded-t-lg", "mb-5", "max-w-full")} src={article.image.clone()} alt={article.title.clone()} />
                    </div>
                    <p class={classes!("mb-3", "font-sans", "text-lg", "text-justify", "text-gray-700")}>{ card.description().into_owned() }</p>
                    <p class={classes!("font-sans", "text-lg", "text-justify", "text-gray-600")}>{ &article.content }</p>
                </div>
            </div>
        },
    };

    html! {
        <article class={classes!("article-card-wrapper")} hidden={props.hidden}>
            { body }
        </article>
    }
}
