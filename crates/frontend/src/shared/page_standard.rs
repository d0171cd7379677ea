//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a001_order--list"`) and a
//! `data-page-category` attribute holding one of the constants below.

/// Records shown as a list or board with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical view over a date range.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD];

/// `true` when `id` has a non-empty entity and category around `--`.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
