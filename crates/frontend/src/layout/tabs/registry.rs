//! Tab content registry: the single mapping from tab.key to its view.

use crate::dashboards::RevenueDashboard;
use crate::domain::a001_order::ui::list::OrderList;
use leptos::logging::log;
use leptos::prelude::*;

/// Keys that [`render_tab_content`] knows how to render
pub const TAB_KEYS: &[&str] = &["a001_order", "d001_revenue"];

/// Render a tab by key; unknown keys get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_order" => view! { <OrderList /> }.into_any(),
        "d001_revenue" => view! { <RevenueDashboard /> }.into_any(),
        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
