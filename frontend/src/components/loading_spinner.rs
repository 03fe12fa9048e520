use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 20,
            SpinnerSize::Large => 40,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Small)]
    pub size: SpinnerSize,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Disabled "Loading..." pill shown while a list waits for its first data.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let dimension = props.size.dimension().to_string();
    let label = props.label.clone().unwrap_or_else(|| AttrValue::from("Loading..."));

    html! {
        <div class={classes!("flex", "justify-center")} role="status" aria-live="polite" aria-busy="true">
            <button
                type="button"
                class={classes!("flex", "items-center", "bg-blue-600", "text-white", "px-4", "py-2", "rounded")}
                disabled=true
            >
                <svg
                    class={classes!("animate-spin", "mr-3")}
                    width={dimension.clone()}
                    height={dimension}
                    viewBox="0 0 24 24"
                >
                    <path fill="currentColor" d="M12 2a10 10 0 00-10 10h2a8 8 0 118 8v2a10 10 0 100-20z"></path>
                </svg>
                { label.as_str() }
            </button>
        </div>
    }
}
