//! Application shell: Sidebar on the left, open tabs in the center.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use leptos::logging::log;
use leptos::prelude::*;

/// Tab opened when the address bar does not name one
const DEFAULT_TAB: &str = "a001_order";

/// Синхронизирует табы с URL (?active=...) и рендерит открытые табы.
#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();

    tabs_store.init_router_integration();
    if tabs_store.active.get_untracked().is_none() {
        tabs_store.open_tab(DEFAULT_TAB, tab_label_for_key(DEFAULT_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("👶 <For> children function called for: '{}'", tab.key);
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}
