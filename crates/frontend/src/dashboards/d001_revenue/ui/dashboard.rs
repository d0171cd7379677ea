use super::state::RevenueState;
use crate::dashboards::d001_revenue::api;
use crate::domain::a001_order::ui::details::{DetailLoad, OrderDetailModal};
use crate::domain::a001_order::{HttpOrderApi, OrderApi};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date, format_opt_datetime};
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Revenue over a date range with a paged list of the orders behind it
#[component]
pub fn RevenueDashboard() -> impl IntoView {
    let state = RwSignal::new(RevenueState::for_today(Utc::now().date_naive()));
    let detail = RwSignal::new(None::<(String, DetailLoad)>);

    let load = move || {
        let (seq, query) = match state.try_update(|s| s.begin_load().map(|q| (s.load_seq, q))) {
            Some(Ok(started)) => started,
            Some(Err(e)) => {
                log::debug!("revenue range rejected: {}", e);
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let result = api::get_revenue_statistics(&query).await;
            if let Err(e) = &result {
                log::warn!("failed to load revenue statistics: {}", e);
            }
            let _ = state.try_update(|s| s.apply_if_current(seq, result));
        });
    };

    let open_detail = move |order_id: String| {
        detail.set(Some((order_id.clone(), DetailLoad::Loading)));
        spawn_local(async move {
            let result = HttpOrderApi::from_config().fetch_detail(&order_id).await;
            let load = DetailLoad::from_result(result);
            let _ = detail.try_update(|current| {
                if let Some((id, slot)) = current {
                    if *id == order_id {
                        *slot = load;
                    }
                }
            });
        });
    };

    load();

    let loading = Signal::derive(move || state.with(|s| s.loading));
    let range_label = Signal::derive(move || {
        state.with(|s| match s.query() {
            Ok(q) => format!("{} – {}", format_date(&q.start_date), format_date(&q.end_date)),
            Err(_) => String::new(),
        })
    });

    view! {
        <PageFrame page_id="d001_revenue--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Revenue"</h1>
                </div>
            </div>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"From"</Label>
                        <DateInput
                            value=Signal::derive(move || state.with(|s| s.date_from.clone()))
                            on_change=move |v| {
                                if state.try_update(|s| s.set_date_from(v)).unwrap_or(false) {
                                    load();
                                }
                            }
                        />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"To"</Label>
                        <DateInput
                            value=Signal::derive(move || state.with(|s| s.date_to.clone()))
                            on_change=move |v| {
                                if state.try_update(|s| s.set_date_to(v)).unwrap_or(false) {
                                    load();
                                }
                            }
                        />
                    </Flex>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load()
                        disabled=loading
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </Flex>

                {move || {
                    state
                        .with(|s| s.error.clone())
                        .map(|err| {
                            let intent = if err.is_retryable() {
                                MessageBarIntent::Error
                            } else {
                                MessageBarIntent::Warning
                            };
                            view! { <MessageBar intent=intent>{err.to_string()}</MessageBar> }
                        })
                }}

                <Show when=move || loading.get() && !state.with(|s| s.is_loaded)>
                    <Spinner />
                </Show>

                {move || {
                    state
                        .with(|s| s.statistics.clone())
                        .map(|stats| {
                            view! {
                                <Flex gap=FlexGap::Large class="revenue-summary">
                                    <Card>
                                        <div class="revenue-summary__label">"Revenue"</div>
                                        <div class="revenue-summary__value">
                                            {format_vnd(stats.total_revenue)}
                                        </div>
                                        <div class="revenue-summary__hint">{range_label.get()}</div>
                                    </Card>
                                    <Card>
                                        <div class="revenue-summary__label">"Orders"</div>
                                        <div class="revenue-summary__value">{stats.total_orders}</div>
                                    </Card>
                                </Flex>
                            }
                        })
                }}

                <Show when=move || state.with(|s| s.statistics.is_some())>
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Order"</TableHeaderCell>
                                    <TableHeaderCell>"Created"</TableHeaderCell>
                                    <TableHeaderCell>"Amount"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || state.with(|s| s.page_rows())
                                    key=|row| row.id.clone()
                                    children=move |row| {
                                        let id = row.id.clone();
                                        view! {
                                            <TableRow
                                                class="revenue-row"
                                                on:click=move |_| open_detail(id.clone())
                                            >
                                                <TableCell>
                                                    <TableCellLayout>{row.id.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format_opt_datetime(row.created_at.as_ref())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_vnd(row.total_amount)}</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>

                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                        total_count=Signal::derive(move || {
                            state.with(|s| s.statistics.as_ref().map(|st| st.total_orders).unwrap_or(0))
                        })
                        on_page_change=Callback::new(move |page: usize| state.update(|s| s.set_page(page)))
                    />
                </Show>
            </div>

            {move || {
                detail
                    .with(|d| d.as_ref().map(|(id, _)| id.clone()))
                    .map(|order_id| {
                        let load = Signal::derive(move || {
                            detail
                                .with(|d| d.as_ref().map(|(_, l)| l.clone()))
                                .unwrap_or(DetailLoad::Loading)
                        });
                        view! {
                            <OrderDetailModal
                                order_id=order_id
                                detail=load
                                on_close=Callback::new(move |_| detail.set(None))
                            />
                        }
                    })
            }}
        </PageFrame>
    }
}
