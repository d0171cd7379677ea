//! Order lifecycle commands.
//!
//! The controller is the only code that talks to the Order Service on behalf
//! of the order list. Every outcome, success or failure, ends up in the
//! [`OrderBoard`]; nothing here panics on I/O.

use super::api::OrderApi;
use super::board::{FetchTicket, OrderBoard};
use contracts::domain::a001_order::{OrderDetail, OrderState};
use contracts::shared::ApiError;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Where the controller keeps its [`OrderBoard`].
///
/// Both accessors return `None` once the owner is gone (a disposed signal);
/// callers drop late results in that case.
pub trait BoardStore: Clone + 'static {
    fn with_board<R>(&self, f: impl FnOnce(&OrderBoard) -> R) -> Option<R>;
    fn update_board<R>(&self, f: impl FnOnce(&mut OrderBoard) -> R) -> Option<R>;
}

impl BoardStore for RwSignal<OrderBoard> {
    fn with_board<R>(&self, f: impl FnOnce(&OrderBoard) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_board<R>(&self, f: impl FnOnce(&mut OrderBoard) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl BoardStore for Rc<RefCell<OrderBoard>> {
    fn with_board<R>(&self, f: impl FnOnce(&OrderBoard) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update_board<R>(&self, f: impl FnOnce(&mut OrderBoard) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// What [`OrderLifecycleController::begin_transition_flow`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The confirmation prompt is open; no request was sent.
    AwaitingConfirmation,
    /// The request was sent and accepted.
    Completed,
    /// The view went away before anything happened.
    Abandoned,
}

#[derive(Clone)]
pub struct OrderLifecycleController<A, S> {
    api: A,
    board: S,
}

impl<A, S> OrderLifecycleController<A, S>
where
    A: OrderApi,
    S: BoardStore,
{
    pub fn new(api: A, board: S) -> Self {
        Self { api, board }
    }

    pub fn board(&self) -> &S {
        &self.board
    }

    /// Fetch the whole order collection and replace the board's copy.
    ///
    /// Returns the number of orders received.
    pub async fn list_orders(&self) -> Result<usize, ApiError> {
        let Some(ticket) = self.board.update_board(|b| b.begin_fetch()) else {
            log::debug!("order list closed, skipping fetch");
            return Ok(0);
        };
        self.fetch_into_board(ticket).await
    }

    async fn fetch_into_board(&self, ticket: FetchTicket) -> Result<usize, ApiError> {
        let result = self.api.list_orders().await;
        let count = result.as_ref().map(|orders| orders.len()).map_err(|e| e.clone());

        match &count {
            Ok(n) => log::info!("loaded {} orders", n),
            Err(e) => log::warn!("failed to load orders: {}", e),
        }

        let applied = self
            .board
            .update_board(|b| b.apply_fetch(ticket, result))
            .unwrap_or(false);
        if !applied {
            log::debug!("dropping superseded order list response");
        }
        count
    }

    /// Send `order_id -> target` and, once accepted, refetch the list.
    ///
    /// The cached order is never edited here: its new state shows up only
    /// through the refetch.
    pub async fn request_transition(
        &self,
        order_id: &str,
        target: OrderState,
    ) -> Result<(), ApiError> {
        let Some(ticket) = self
            .board
            .update_board(|b| b.begin_transition(order_id, target))
        else {
            return Ok(());
        };
        let ticket = ticket?;

        log::debug!(
            "order {}: {} -> {}",
            order_id,
            ticket.transition.from,
            ticket.transition.to
        );
        let result = self.api.update_state(order_id, target).await;

        let refetch = self
            .board
            .update_board(|b| b.finish_transition(&ticket, &result))
            .flatten();

        match result {
            Ok(()) => {
                log::info!("order {} moved to {}", order_id, target);
                if let Some(refetch) = refetch {
                    if let Err(e) = self.fetch_into_board(refetch).await {
                        log::warn!("refresh after order {} update failed: {}", order_id, e);
                    }
                }
                Ok(())
            }
            Err(e) => {
                log::warn!("order {} update rejected: {}", order_id, e);
                Err(e)
            }
        }
    }

    /// Entry point for the row action button.
    pub async fn begin_transition_flow(
        &self,
        order_id: &str,
        target: OrderState,
    ) -> Result<FlowOutcome, ApiError> {
        let Some(plan) = self.board.with_board(|b| b.plan_transition(order_id, target)) else {
            return Ok(FlowOutcome::Abandoned);
        };

        let transition = match plan {
            Ok(t) => t,
            Err(e) => {
                self.board.update_board(|b| b.set_transition_error(e.clone()));
                return Err(e);
            }
        };

        if transition.requires_confirmation() {
            return match self.board.update_board(|b| b.open_confirmation(order_id, target)) {
                Some(Ok(())) => Ok(FlowOutcome::AwaitingConfirmation),
                Some(Err(e)) => {
                    self.board.update_board(|b| b.set_transition_error(e.clone()));
                    Err(e)
                }
                None => Ok(FlowOutcome::Abandoned),
            };
        }

        self.request_transition(order_id, target).await?;
        Ok(FlowOutcome::Completed)
    }

    /// Accept the open prompt. Returns false when there was nothing to
    /// accept (already accepted, declined, or opened for another order).
    pub async fn confirm_and_transition(
        &self,
        order_id: &str,
        target: OrderState,
    ) -> Result<bool, ApiError> {
        let taken = self
            .board
            .update_board(|b| b.take_confirmation(order_id, target))
            .flatten();
        if taken.is_none() {
            log::debug!("no open confirmation for order {}", order_id);
            return Ok(false);
        }
        self.request_transition(order_id, target).await?;
        Ok(true)
    }

    pub fn decline(&self) -> bool {
        self.board
            .update_board(|b| b.decline_confirmation())
            .flatten()
            .is_some()
    }

    pub async fn load_detail(&self, order_id: &str) -> Result<OrderDetail, ApiError> {
        if order_id.trim().is_empty() {
            return Err(ApiError::Validation("Order id is empty".to_string()));
        }
        let result = self.api.fetch_detail(order_id).await;
        if let Err(e) = &result {
            log::warn!("failed to load order {}: {}", order_id, e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::Order;
    use contracts::shared::decode_data;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Update(String, i32),
        Detail(String),
    }

    #[derive(Default)]
    struct Server {
        orders: Vec<Order>,
        list_failure: Option<ApiError>,
        update_failure: Option<ApiError>,
        slow_list: bool,
        calls: Vec<Call>,
    }

    /// Stable in-memory backend: accepted updates change its own copy only.
    #[derive(Clone, Default)]
    struct ScriptedApi(Rc<RefCell<Server>>);

    impl ScriptedApi {
        fn with_orders(orders: Vec<Order>) -> Self {
            let api = Self::default();
            api.0.borrow_mut().orders = orders;
            api
        }

        fn calls(&self) -> Vec<Call> {
            self.0.borrow().calls.clone()
        }

        fn updates(&self) -> usize {
            self.calls()
                .iter()
                .filter(|c| matches!(c, Call::Update(..)))
                .count()
        }
    }

    impl OrderApi for ScriptedApi {
        async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
            let slow = {
                let mut server = self.0.borrow_mut();
                server.calls.push(Call::List);
                server.slow_list
            };
            if slow {
                for _ in 0..3 {
                    tokio::task::yield_now().await;
                }
            }

            let server = self.0.borrow();
            match &server.list_failure {
                Some(e) => Err(e.clone()),
                None => Ok(server.orders.clone()),
            }
        }

        async fn update_state(&self, order_id: &str, state: OrderState) -> Result<(), ApiError> {
            self.0
                .borrow_mut()
                .calls
                .push(Call::Update(order_id.to_string(), state.code()));
            tokio::task::yield_now().await;

            let mut server = self.0.borrow_mut();
            if let Some(e) = &server.update_failure {
                return Err(e.clone());
            }
            if let Some(order) = server.orders.iter_mut().find(|o| o.id == order_id) {
                order.state = state;
            }
            Ok(())
        }

        async fn fetch_detail(&self, order_id: &str) -> Result<OrderDetail, ApiError> {
            self.0
                .borrow_mut()
                .calls
                .push(Call::Detail(order_id.to_string()));
            Err(ApiError::Domain {
                status: 404,
                message: "Order not found".to_string(),
            })
        }
    }

    type Store = Rc<RefCell<OrderBoard>>;

    fn a1_orders() -> Vec<Order> {
        let body = r#"{
            "status": 200,
            "data": [
                {"_id": "A1", "state": 0, "total_amount": 150000,
                 "products": [{"productId": "P1", "sizeId": "S1", "quantity": 3, "price": 50000}]}
            ]
        }"#;
        decode_data(200, body).unwrap()
    }

    fn order(id: &str, state: OrderState) -> Order {
        Order {
            id: id.to_string(),
            state,
            items: Vec::new(),
            total_amount: 100000.0,
            created_at: None,
        }
    }

    fn controller(api: ScriptedApi) -> OrderLifecycleController<ScriptedApi, Store> {
        OrderLifecycleController::new(api, Rc::new(RefCell::new(OrderBoard::new())))
    }

    fn visible_ids(store: &Store) -> Vec<String> {
        store.borrow().visible().map(|o| o.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_pending_filter_shows_a1() {
        let ctl = controller(ScriptedApi::with_orders(a1_orders()));
        assert_eq!(ctl.list_orders().await, Ok(1));

        assert_eq!(visible_ids(ctl.board()), vec!["A1"]);
        ctl.board().borrow_mut().set_filter(OrderState::Shipping);
        assert!(visible_ids(ctl.board()).is_empty());
    }

    #[tokio::test]
    async fn test_ship_moves_a1_to_shipping_view() {
        let api = ScriptedApi::with_orders(a1_orders());
        let ctl = controller(api.clone());
        ctl.list_orders().await.unwrap();

        let outcome = ctl
            .begin_transition_flow("A1", OrderState::Shipping)
            .await
            .unwrap();
        assert_eq!(outcome, FlowOutcome::Completed);
        assert_eq!(
            api.calls(),
            vec![Call::List, Call::Update("A1".to_string(), 1), Call::List]
        );

        assert!(visible_ids(ctl.board()).is_empty());
        ctl.board().borrow_mut().set_filter(OrderState::Shipping);
        assert_eq!(visible_ids(ctl.board()), vec!["A1"]);
    }

    #[tokio::test]
    async fn test_delivery_waits_for_confirmation() {
        let api = ScriptedApi::with_orders(vec![order("B2", OrderState::Shipping)]);
        let ctl = controller(api.clone());
        ctl.list_orders().await.unwrap();

        let outcome = ctl
            .begin_transition_flow("B2", OrderState::Delivered)
            .await
            .unwrap();
        assert_eq!(outcome, FlowOutcome::AwaitingConfirmation);
        assert_eq!(api.updates(), 0);

        assert!(ctl.decline());
        assert_eq!(api.updates(), 0);
        assert!(!ctl
            .confirm_and_transition("B2", OrderState::Delivered)
            .await
            .unwrap());
        assert_eq!(api.updates(), 0);
    }

    #[tokio::test]
    async fn test_double_accept_sends_one_request() {
        let api = ScriptedApi::with_orders(vec![order("B2", OrderState::Shipping)]);
        let ctl = controller(api.clone());
        ctl.list_orders().await.unwrap();
        ctl.begin_transition_flow("B2", OrderState::Delivered)
            .await
            .unwrap();

        let (first, second) = tokio::join!(
            ctl.confirm_and_transition("B2", OrderState::Delivered),
            ctl.confirm_and_transition("B2", OrderState::Delivered),
        );
        assert_eq!(first, Ok(true));
        assert_eq!(second, Ok(false));
        assert_eq!(api.updates(), 1);

        ctl.board().borrow_mut().set_filter(OrderState::Delivered);
        assert_eq!(visible_ids(ctl.board()), vec!["B2"]);
    }

    #[tokio::test]
    async fn test_row_lock_rejects_second_request() {
        let api = ScriptedApi::with_orders(a1_orders());
        let ctl = controller(api.clone());
        ctl.list_orders().await.unwrap();

        let (first, second) = tokio::join!(
            ctl.request_transition("A1", OrderState::Shipping),
            ctl.request_transition("A1", OrderState::Shipping),
        );
        assert_eq!(first, Ok(()));
        assert!(matches!(second, Err(ApiError::Validation(_))));
        assert_eq!(api.updates(), 1);
        assert!(!ctl.board().borrow().is_in_flight("A1"));
    }

    #[tokio::test]
    async fn test_row_stays_locked_while_refetching() {
        let api = ScriptedApi::with_orders(a1_orders());
        let ctl = controller(api.clone());
        ctl.list_orders().await.unwrap();
        api.0.borrow_mut().slow_list = true;

        let retry = async {
            // wait for the PUT to be answered and the refetch to start
            for _ in 0..20 {
                if api.calls().len() == 3 {
                    break;
                }
                tokio::task::yield_now().await;
            }
            let board = ctl.board().borrow().clone();
            assert!(board.is_loading());
            assert_eq!(board.find("A1").map(|o| o.state), Some(OrderState::Pending));
            assert!(board.is_in_flight("A1"));
            ctl.request_transition("A1", OrderState::Shipping).await
        };

        let (first, second) = tokio::join!(
            ctl.request_transition("A1", OrderState::Shipping),
            retry,
        );
        assert_eq!(first, Ok(()));
        assert!(matches!(second, Err(ApiError::Validation(_))));
        assert_eq!(api.updates(), 1);
        assert_eq!(
            api.calls(),
            vec![Call::List, Call::Update("A1".to_string(), 1), Call::List]
        );
        assert!(!ctl.board().borrow().is_in_flight("A1"));
    }

    #[tokio::test]
    async fn test_illegal_transition_sends_nothing() {
        let api = ScriptedApi::with_orders(a1_orders());
        let ctl = controller(api.clone());
        ctl.list_orders().await.unwrap();

        let result = ctl
            .begin_transition_flow("A1", OrderState::Delivered)
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert_eq!(api.calls(), vec![Call::List]);
        assert!(ctl.board().borrow().transition_error().is_some());
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_list() {
        let api = ScriptedApi::with_orders(a1_orders());
        api.0.borrow_mut().update_failure = Some(ApiError::Domain {
            status: 400,
            message: "Order is locked".to_string(),
        });
        let ctl = controller(api.clone());
        ctl.list_orders().await.unwrap();
        let before = ctl.board().borrow().orders().to_vec();

        let result = ctl.request_transition("A1", OrderState::Shipping).await;
        assert!(matches!(result, Err(ApiError::Domain { status: 400, .. })));

        let board = ctl.board().borrow();
        assert_eq!(board.orders(), before.as_slice());
        assert_eq!(
            board.transition_error().map(|e| e.to_string()),
            Some("Order is locked".to_string())
        );
        assert_eq!(api.calls(), vec![Call::List, Call::Update("A1".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_domain_error_clears_list() {
        let api = ScriptedApi::with_orders(a1_orders());
        let ctl = controller(api.clone());
        ctl.list_orders().await.unwrap();

        api.0.borrow_mut().list_failure = Some(ApiError::Domain {
            status: 500,
            message: "Database unavailable".to_string(),
        });
        let result = ctl.list_orders().await;
        assert!(result.is_err());

        let board = ctl.board().borrow();
        assert!(board.orders().is_empty());
        assert_eq!(
            board.list_error().map(|e| e.to_string()),
            Some("Database unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn test_listing_is_stable() {
        let api = ScriptedApi::with_orders(vec![
            order("A1", OrderState::Pending),
            order("C3", OrderState::Pending),
            order("B2", OrderState::Shipping),
        ]);
        let ctl = controller(api);
        ctl.list_orders().await.unwrap();
        let first = ctl.board().borrow().orders().to_vec();
        ctl.list_orders().await.unwrap();
        assert_eq!(ctl.board().borrow().orders(), first.as_slice());
    }

    #[tokio::test]
    async fn test_load_detail_surfaces_domain_error() {
        let api = ScriptedApi::default();
        let ctl = controller(api.clone());

        let err = ctl.load_detail("Z9").await.unwrap_err();
        assert_eq!(err.to_string(), "Order not found");
        assert!(ctl.load_detail("  ").await.is_err());
        assert_eq!(api.calls(), vec![Call::Detail("Z9".to_string())]);
    }
}
