use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous/next page switcher for client-side paged tables.
///
/// Pages are 0-indexed; both buttons clamp at the ends.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let last_page = move || total_pages.get().max(1) - 1;

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = prev_page(current_page.get()) {
                        on_page_change.run(page);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = next_page(current_page.get(), total_pages.get()) {
                        on_page_change.run(page);
                    }
                }
                disabled=move || current_page.get() >= last_page()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}

pub fn prev_page(current: usize) -> Option<usize> {
    current.checked_sub(1)
}

pub fn next_page(current: usize, total_pages: usize) -> Option<usize> {
    (current + 1 < total_pages).then_some(current + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_steps_clamp() {
        assert_eq!(prev_page(0), None);
        assert_eq!(prev_page(2), Some(1));
        assert_eq!(next_page(0, 3), Some(1));
        assert_eq!(next_page(2, 3), None);
        assert_eq!(next_page(0, 1), None);
    }
}
