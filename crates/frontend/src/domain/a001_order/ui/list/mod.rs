pub mod view_model;

use self::view_model::OrderListViewModel;
use crate::domain::a001_order::ui::details::{DetailLoad, OrderDetailModal};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::date_utils::format_opt_datetime;
use crate::shared::icons::icon;
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_order::{Order, OrderState};
use leptos::prelude::*;
use thaw::*;

/// Badge colour per order status
pub fn state_badge_color(state: OrderState) -> BadgeColor {
    match state {
        OrderState::Pending => BadgeColor::Warning,
        OrderState::Shipping => BadgeColor::Informative,
        OrderState::Delivered => BadgeColor::Success,
        OrderState::Cancelled => BadgeColor::Danger,
        OrderState::Unknown(_) => BadgeColor::Subtle,
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let vm = OrderListViewModel::new();
    let board = vm.board;
    vm.load_command();

    let loading = Signal::derive(move || board.with(|b| b.is_loading()));
    let visible = Signal::derive(move || board.with(|b| b.visible().cloned().collect::<Vec<_>>()));
    let show_empty = Signal::derive(move || {
        board.with(|b| b.is_loaded() && b.list_error().is_none() && b.visible().next().is_none())
    });

    let confirm_open = Signal::derive(move || board.with(|b| b.confirmation().is_some()));
    let confirm_message = Signal::derive(move || {
        board.with(|b| {
            b.confirmation()
                .map(|c| {
                    format!(
                        "Order #{} will be marked as {}. Continue?",
                        c.order_id,
                        c.transition.to.label()
                    )
                })
                .unwrap_or_default()
        })
    });

    view! {
        <PageFrame page_id="a001_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.load_command()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Flex gap=FlexGap::Small class="order-filter">
                    {OrderState::FILTERABLE
                        .into_iter()
                        .map(|state| {
                            let appearance = Signal::derive(move || {
                                if board.with(|b| b.filter()) == state {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            });
                            view! {
                                <Button appearance=appearance on_click=move |_| vm.select_filter(state)>
                                    {state.label()}
                                    " ("
                                    {move || board.with(|b| b.count_in(state))}
                                    ")"
                                </Button>
                            }
                        })
                        .collect_view()}
                </Flex>

                {move || {
                    board
                        .with(|b| b.list_error().cloned())
                        .map(|err| {
                            view! {
                                <MessageBar intent=MessageBarIntent::Error>
                                    <span>{err.to_string()}</span>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| vm.load_command()
                                    >
                                        "Retry"
                                    </Button>
                                </MessageBar>
                            }
                        })
                }}

                {move || {
                    board
                        .with(|b| b.transition_error().cloned())
                        .map(|err| {
                            view! {
                                <MessageBar intent=MessageBarIntent::Warning>
                                    <span>{err.to_string()}</span>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| vm.dismiss_error()
                                    >
                                        {icon("x")}
                                    </Button>
                                </MessageBar>
                            }
                        })
                }}

                <Show when=move || loading.get() && !board.with(|b| b.is_loaded())>
                    <Spinner />
                </Show>

                <Show when=move || show_empty.get()>
                    <div class="order-board__empty">"No orders in this status"</div>
                </Show>

                <div class="order-board">
                    <For
                        each=move || visible.get()
                        key=|order| format!("{}:{}", order.id, order.state.code())
                        children=move |order: Order| view! { <OrderCard order=order vm=vm /> }
                    />
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Confirm status change"
                message=confirm_message
                busy=vm.confirm_busy
                on_confirm=Callback::new(move |_| vm.confirm_command())
                on_cancel=Callback::new(move |_| vm.decline_command())
            />

            {move || {
                vm.detail
                    .with(|d| d.as_ref().map(|(id, _)| id.clone()))
                    .map(|order_id| {
                        let detail = Signal::derive(move || {
                            vm.detail
                                .with(|d| d.as_ref().map(|(_, load)| load.clone()))
                                .unwrap_or(DetailLoad::Loading)
                        });
                        view! {
                            <OrderDetailModal
                                order_id=order_id
                                detail=detail
                                on_close=Callback::new(move |_| vm.close_detail())
                            />
                        }
                    })
            }}
        </PageFrame>
    }
}

#[component]
fn OrderCard(order: Order, vm: OrderListViewModel) -> impl IntoView {
    let board = vm.board;
    let state = order.state;
    let order_id = StoredValue::new(order.id.clone());
    let in_flight = Signal::derive(move || board.with(|b| order_id.with_value(|id| b.is_in_flight(id))));

    let action = state.transition().map(|t| {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                disabled=in_flight
                on_click=move |_| vm.transition_command(order_id.get_value(), t.to)
            >
                {move || if in_flight.get() { "Updating..." } else { t.action_label() }}
            </Button>
        }
    });

    let items = order
        .items
        .iter()
        .map(|item| {
            let size = item
                .size
                .as_ref()
                .map(|s| s.display_name().to_string())
                .unwrap_or_default();
            view! {
                <div class="order-card__item">
                    <span class="order-card__product">{item.product_name().to_string()}</span>
                    <span class="order-card__size">{size}</span>
                    <span class="order-card__qty">"× "{item.quantity}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="order-card">
            <Card>
                <div class="order-card__header">
                    <span class="order-card__id">"#"{order.id.clone()}</span>
                    <Badge appearance=BadgeAppearance::Tint color=state_badge_color(state)>
                        {state.label()}
                    </Badge>
                </div>
                <div class="order-card__items">{items}</div>
                <div class="order-card__footer">
                    <span class="order-card__date">
                        {format_opt_datetime(order.created_at.as_ref())}
                    </span>
                    <strong class="order-card__total">{format_vnd(order.total_amount)}</strong>
                </div>
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.open_detail(order_id.get_value())
                    >
                        "Details"
                    </Button>
                    {action}
                </Flex>
            </Card>
        </div>
    }
}
