//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a001_order--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_order--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) || !is_known_category(category) {
        log::warn!("page '{}' has non-standard metadata ({})", page_id, category);
    }

    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
