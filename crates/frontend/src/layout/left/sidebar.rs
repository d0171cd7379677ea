//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "orders",
            items: vec![("a001_order", tab_label_for_key("a001_order"), "orders")],
        },
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![("d001_revenue", tab_label_for_key("d001_revenue"), "bar-chart")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {groups
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let items = group.items.clone();
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    expanded_groups.update(|ids| {
                                        if let Some(pos) = ids.iter().position(|x| *x == group_id) {
                                            ids.remove(pos);
                                        } else {
                                            ids.push(group_id);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|ids| ids.contains(&group_id))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id))>
                                <div class="app-sidebar__children">
                                    {items
                                        .iter()
                                        .map(|&(id, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|a| a.as_deref() == Some(id))
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(id, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
