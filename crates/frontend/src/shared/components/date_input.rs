use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<String>,
    /// Receives the new value in `yyyy-mm-dd` format
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)] max: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            prop:value=value
            max=max
            on:input=move |ev| on_change(event_target_value(&ev))
        />
    }
}
