//! Order drill-down shown in a modal over the list or the revenue dashboard.

use crate::shared::date_utils::format_opt_datetime;
use crate::shared::modal::Modal;
use crate::shared::number_format::format_vnd;
use contracts::domain::a001_order::OrderDetail;
use contracts::shared::ApiError;
use leptos::prelude::*;
use thaw::*;

/// Load state of the detail modal
#[derive(Debug, Clone, PartialEq)]
pub enum DetailLoad {
    Loading,
    Loaded(OrderDetail),
    Failed(ApiError),
}

impl DetailLoad {
    pub fn from_result(result: Result<OrderDetail, ApiError>) -> Self {
        match result {
            Ok(detail) => DetailLoad::Loaded(detail),
            Err(e) => DetailLoad::Failed(e),
        }
    }
}

#[component]
pub fn OrderDetailModal(
    order_id: String,
    #[prop(into)] detail: Signal<DetailLoad>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=format!("Order #{}", order_id) on_close=on_close>
            {move || match detail.get() {
                DetailLoad::Loading => view! { <Spinner /> }.into_any(),
                DetailLoad::Failed(err) => view! {
                    <MessageBar intent=MessageBarIntent::Error>{err.to_string()}</MessageBar>
                }
                .into_any(),
                DetailLoad::Loaded(d) => view! { <DetailBody detail=d /> }.into_any(),
            }}
        </Modal>
    }
}

#[component]
fn DetailBody(detail: OrderDetail) -> impl IntoView {
    let lines = detail.products.clone();

    view! {
        <div class="order-detail">
            <div class="order-detail__summary">
                <div>
                    <span class="order-detail__label">"Client"</span>
                    <span>{detail.client_id.clone()}</span>
                </div>
                <div>
                    <span class="order-detail__label">"Status"</span>
                    <span>{detail.state.to_string()}</span>
                </div>
                <div>
                    <span class="order-detail__label">"Ordered at"</span>
                    <span>{format_opt_datetime(detail.order_time.as_ref())}</span>
                </div>
                <div>
                    <span class="order-detail__label">"Total"</span>
                    <strong>{format_vnd(detail.total_amount)}</strong>
                </div>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Size"</TableHeaderCell>
                        <TableHeaderCell>"Qty"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {lines
                        .into_iter()
                        .map(|line| {
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{line.product_name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{line.size_name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{line.quantity}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
