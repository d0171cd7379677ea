use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog closed by the close button, an overlay click or Escape.
#[component]
pub fn Modal(
    title: String,
    on_close: Callback<()>,
    /// Extra buttons rendered next to the close button
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        {move || action_buttons.as_ref().map(|buttons| buttons())}
                        <button
                            class="button button--icon modal__close"
                            on:click=move |_| on_close.run(())
                        >
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
