use crate::domain::a001_order::api::HttpOrderApi;
use crate::domain::a001_order::board::OrderBoard;
use crate::domain::a001_order::controller::OrderLifecycleController;
use crate::domain::a001_order::ui::details::DetailLoad;
use contracts::domain::a001_order::OrderState;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub type LiveController = OrderLifecycleController<HttpOrderApi, RwSignal<OrderBoard>>;

/// ViewModel for the order list page
#[derive(Clone, Copy)]
pub struct OrderListViewModel {
    pub board: RwSignal<OrderBoard>,
    /// Order shown in the detail modal
    pub detail: RwSignal<Option<(String, DetailLoad)>>,
    /// Set between the accept click and the end of the request
    pub confirm_busy: RwSignal<bool>,
    controller: StoredValue<LiveController>,
}

impl OrderListViewModel {
    pub fn new() -> Self {
        let board = RwSignal::new(OrderBoard::new());
        Self {
            board,
            detail: RwSignal::new(None),
            confirm_busy: RwSignal::new(false),
            controller: StoredValue::new(OrderLifecycleController::new(
                HttpOrderApi::from_config(),
                board,
            )),
        }
    }

    pub fn controller(&self) -> LiveController {
        self.controller.get_value()
    }

    // Command outcomes land in the board.

    pub fn load_command(&self) {
        let ctl = self.controller();
        spawn_local(async move {
            let _ = ctl.list_orders().await;
        });
    }

    pub fn select_filter(&self, state: OrderState) {
        self.board.update(|b| b.set_filter(state));
    }

    pub fn transition_command(&self, order_id: String, target: OrderState) {
        let ctl = self.controller();
        spawn_local(async move {
            if let Ok(outcome) = ctl.begin_transition_flow(&order_id, target).await {
                log::debug!("order {}: {:?}", order_id, outcome);
            }
        });
    }

    pub fn confirm_command(&self) {
        if self.confirm_busy.get_untracked() {
            return;
        }
        let Some(pending) = self.board.with_untracked(|b| b.confirmation().cloned()) else {
            return;
        };
        let busy = self.confirm_busy;
        busy.set(true);
        let ctl = self.controller();
        spawn_local(async move {
            let _ = ctl
                .confirm_and_transition(&pending.order_id, pending.transition.to)
                .await;
            let _ = busy.try_set(false);
        });
    }

    pub fn decline_command(&self) {
        self.controller().decline();
    }

    pub fn dismiss_error(&self) {
        self.board.update(|b| b.dismiss_transition_error());
    }

    pub fn open_detail(&self, order_id: String) {
        self.detail.set(Some((order_id.clone(), DetailLoad::Loading)));
        let detail = self.detail;
        let ctl = self.controller();
        spawn_local(async move {
            let load = DetailLoad::from_result(ctl.load_detail(&order_id).await);
            // the modal may have been closed or switched meanwhile
            let _ = detail.try_update(|current| {
                if let Some((id, state)) = current {
                    if *id == order_id {
                        *state = load;
                    }
                }
            });
        });
    }

    pub fn close_detail(&self) {
        self.detail.set(None);
    }
}
