use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </div>
    }
}
