//! Filter buttons and the search box shared by the filterable grids
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Row of category buttons; exactly one is marked active (`aria-pressed`).
#[component]
pub fn FilterBar(
    /// `(value, label)` pairs in display order
    categories: &'static [(&'static str, &'static str)],
    /// Currently active value
    #[prop(into)]
    active: Signal<String>,
    /// Called with the clicked value
    #[prop(into)]
    on_select: Callback<String>,
    /// Class put on every button (`filter-btn`, `blog-filter-btn`, ...)
    #[prop(optional)]
    button_class: &'static str,
) -> impl IntoView {
    let button_class = if button_class.is_empty() { "filter-btn" } else { button_class };

    view! {
        <div class="filter-bar" role="group">
            <ButtonGroup>
                {categories
                    .iter()
                    .map(|(value, label)| {
                        let value = *value;
                        let is_active = move || active.get() == value;
                        view! {
                            <Button
                                class=button_class
                                appearance=move || {
                                    if is_active() { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                }
                                attr:aria-pressed=move || is_active().to_string()
                                attr:data-filter=value
                                on_click=move |_| on_select.run(value.to_string())
                            >
                                {*label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </ButtonGroup>
        </div>
    }
}

/// Search box. Every keystroke is forwarded; debouncing is the caller's job.
#[component]
pub fn SearchInput(
    /// Element id, e.g. `portfolioSearch`
    id: &'static str,
    /// Called with the raw input value
    #[prop(into)]
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());

    let clear = move |_| {
        set_input_value.set(String::new());
        on_input.run(String::new());
    };

    view! {
        <div class="search-box">
            <span class="search-icon">{icon("search")}</span>
            <input
                id=id
                type="search"
                placeholder=placeholder
                aria-label="Search"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    set_input_value.set(val.clone());
                    on_input.run(val);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-clear" title="Clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
