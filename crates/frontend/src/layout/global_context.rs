use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Shell state shared through context: open tabs, the active tab and the
/// sidebar toggle.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Sync the active tab with `?active=<key>` in the address bar.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_query(&search) {
            let title = super::tabs::tab_label_for_key(&active_key);
            let title = if title.is_empty() { active_key.as_str() } else { title };
            self.open_tab(&active_key, title);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = active_query(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("🔷 open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| {
            if push_tab(tabs, key, title) {
                leptos::logging::log!("✅ Tab added. Total tabs: {}", tabs.len());
            }
        });
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("🔴 close_tab: key='{}'", key);
        let active = self.active.get_untracked();
        let mut next = None;
        self.opened.update(|tabs| {
            next = remove_tab(tabs, key, active.as_deref());
        });
        if active.as_deref() == Some(key) {
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Append a tab unless one with `key` is already open. Returns true if added.
fn push_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|t| t.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// Remove `key` and return the tab that should become active: the last
/// remaining tab when the closed one was active, otherwise the current one.
fn remove_tab(tabs: &mut Vec<Tab>, key: &str, active: Option<&str>) -> Option<String> {
    tabs.retain(|t| t.key != key);
    if active == Some(key) {
        tabs.last().map(|t| t.key.clone())
    } else {
        active.map(str::to_string)
    }
}

fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn active_query(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}
