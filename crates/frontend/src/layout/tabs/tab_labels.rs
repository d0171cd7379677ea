//! Tab labels, one per registered tab key.

/// Readable title for a tab key. Empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates (a0xx) ─────────────────────────────────────────────
        "a001_order" => "Orders",

        // ── Dashboards (d0xx) ─────────────────────────────────────────────
        "d001_revenue" => "Revenue",

        _ => "",
    }
}
