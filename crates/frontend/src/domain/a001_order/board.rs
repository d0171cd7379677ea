//! View state of the order list.
//!
//! The board owns the whole order collection as last fetched. It is replaced
//! wholesale by every successful fetch and never patched in place: after a
//! transition the caller refetches instead of editing the cached order.

use contracts::domain::a001_order::{Order, OrderState, Transition};
use contracts::shared::ApiError;
use std::collections::HashSet;

/// Identifies one list fetch. Only the most recent ticket may apply its
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Issued when a transition request is allowed to go out; hand it back to
/// [`OrderBoard::finish_transition`] when the response arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTicket {
    pub order_id: String,
    pub transition: Transition,
}

/// Open yes/no prompt guarding a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub order_id: String,
    pub transition: Transition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBoard {
    orders: Vec<Order>,
    filter: OrderState,
    loading: bool,
    loaded: bool,
    list_error: Option<ApiError>,
    transition_error: Option<ApiError>,
    in_flight: HashSet<String>,
    /// Accepted transitions still locked until the list is refetched
    settling: HashSet<String>,
    confirmation: Option<PendingConfirmation>,
    fetch_seq: u64,
}

impl Default for OrderBoard {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            filter: OrderState::Pending,
            loading: false,
            loaded: false,
            list_error: None,
            transition_error: None,
            in_flight: HashSet::new(),
            settling: HashSet::new(),
            confirmation: None,
            fetch_seq: 0,
        }
    }
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn filter(&self) -> OrderState {
        self.filter
    }

    pub fn set_filter(&mut self, filter: OrderState) {
        self.filter = filter;
    }

    /// Orders in the active filter, in the order the service returned them.
    pub fn visible(&self) -> impl Iterator<Item = &Order> + '_ {
        let filter = self.filter;
        self.orders.iter().filter(move |o| o.state == filter)
    }

    pub fn count_in(&self, state: OrderState) -> usize {
        self.orders.iter().filter(|o| o.state == state).count()
    }

    pub fn find(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// At least one fetch has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn list_error(&self) -> Option<&ApiError> {
        self.list_error.as_ref()
    }

    pub fn transition_error(&self) -> Option<&ApiError> {
        self.transition_error.as_ref()
    }

    pub fn set_transition_error(&mut self, error: ApiError) {
        self.transition_error = Some(error);
    }

    pub fn dismiss_transition_error(&mut self) {
        self.transition_error = None;
    }

    pub fn is_in_flight(&self, order_id: &str) -> bool {
        self.in_flight.contains(order_id)
    }

    pub fn confirmation(&self) -> Option<&PendingConfirmation> {
        self.confirmation.as_ref()
    }

    // ── list fetch ──────────────────────────────────────────────────────

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_seq += 1;
        self.loading = true;
        FetchTicket(self.fetch_seq)
    }

    /// Apply a fetch result. Returns false when a newer fetch has started
    /// since `ticket` was issued; the result is then dropped.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Order>, ApiError>,
    ) -> bool {
        if ticket.0 != self.fetch_seq {
            return false;
        }
        self.loading = false;
        self.loaded = true;
        for order_id in self.settling.drain() {
            self.in_flight.remove(&order_id);
        }
        match result {
            Ok(orders) => {
                self.orders = orders;
                self.list_error = None;
            }
            Err(e) => {
                self.orders.clear();
                self.list_error = Some(e);
            }
        }
        true
    }

    // ── transitions ─────────────────────────────────────────────────────

    /// Resolve `order_id -> target` against the order's current state.
    pub fn plan_transition(
        &self,
        order_id: &str,
        target: OrderState,
    ) -> Result<Transition, ApiError> {
        let order = self.find(order_id).ok_or_else(|| {
            ApiError::Validation(format!("Order {} is not in the current list", order_id))
        })?;
        order.state.check_transition(target)
    }

    /// Guard and lock the row. On failure nothing is locked and the error is
    /// also kept for display.
    pub fn begin_transition(
        &mut self,
        order_id: &str,
        target: OrderState,
    ) -> Result<TransitionTicket, ApiError> {
        let checked = self.plan_transition(order_id, target).and_then(|transition| {
            if self.in_flight.contains(order_id) {
                Err(ApiError::Validation(format!(
                    "Order {} is already being updated",
                    order_id
                )))
            } else {
                Ok(transition)
            }
        });

        match checked {
            Ok(transition) => {
                self.in_flight.insert(order_id.to_string());
                self.transition_error = None;
                Ok(TransitionTicket {
                    order_id: order_id.to_string(),
                    transition,
                })
            }
            Err(e) => {
                self.transition_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Settle a transition response.
    ///
    /// A rejected request releases the row at once. An accepted one keeps the
    /// row locked and starts the refetch: the cached order still shows the
    /// old state until that fetch lands, and the lock is released by
    /// [`OrderBoard::apply_fetch`].
    pub fn finish_transition(
        &mut self,
        ticket: &TransitionTicket,
        result: &Result<(), ApiError>,
    ) -> Option<FetchTicket> {
        match result {
            Ok(()) => {
                self.settling.insert(ticket.order_id.clone());
                Some(self.begin_fetch())
            }
            Err(e) => {
                self.in_flight.remove(&ticket.order_id);
                self.transition_error = Some(e.clone());
                None
            }
        }
    }

    // ── confirmation gate ───────────────────────────────────────────────

    pub fn open_confirmation(
        &mut self,
        order_id: &str,
        target: OrderState,
    ) -> Result<(), ApiError> {
        let transition = self.plan_transition(order_id, target)?;
        if !transition.requires_confirmation() {
            return Err(ApiError::Validation(format!(
                "{} -> {} does not need confirmation",
                transition.from, transition.to
            )));
        }
        if self.in_flight.contains(order_id) {
            return Err(ApiError::Validation(format!(
                "Order {} is already being updated",
                order_id
            )));
        }
        self.confirmation = Some(PendingConfirmation {
            order_id: order_id.to_string(),
            transition,
        });
        Ok(())
    }

    /// Consume the gate if it is open for exactly this order and target.
    /// A second call finds nothing.
    pub fn take_confirmation(
        &mut self,
        order_id: &str,
        target: OrderState,
    ) -> Option<PendingConfirmation> {
        match &self.confirmation {
            Some(c) if c.order_id == order_id && c.transition.to == target => {
                self.confirmation.take()
            }
            _ => None,
        }
    }

    pub fn decline_confirmation(&mut self) -> Option<PendingConfirmation> {
        self.confirmation.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, state: OrderState) -> Order {
        Order {
            id: id.to_string(),
            state,
            items: Vec::new(),
            total_amount: 150000.0,
            created_at: None,
        }
    }

    fn loaded(orders: Vec<Order>) -> OrderBoard {
        let mut board = OrderBoard::new();
        let ticket = board.begin_fetch();
        board.apply_fetch(ticket, Ok(orders));
        board
    }

    #[test]
    fn test_filter_keeps_server_order() {
        let mut board = loaded(vec![
            order("A1", OrderState::Pending),
            order("B2", OrderState::Shipping),
            order("C3", OrderState::Pending),
        ]);
        let ids: Vec<_> = board.visible().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "C3"]);

        board.set_filter(OrderState::Shipping);
        let ids: Vec<_> = board.visible().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["B2"]);
        assert_eq!(board.count_in(OrderState::Delivered), 0);
    }

    #[test]
    fn test_unknown_state_is_never_visible() {
        let mut board = loaded(vec![order("X", OrderState::Unknown(9))]);
        for state in OrderState::FILTERABLE {
            board.set_filter(state);
            assert_eq!(board.visible().count(), 0);
        }
    }

    #[test]
    fn test_failed_fetch_clears_list() {
        let mut board = loaded(vec![order("A1", OrderState::Pending)]);
        let ticket = board.begin_fetch();
        assert!(board.is_loading());
        board.apply_fetch(
            ticket,
            Err(ApiError::Domain {
                status: 500,
                message: "boom".to_string(),
            }),
        );
        assert!(board.orders().is_empty());
        assert!(!board.is_loading());
        assert_eq!(board.list_error().map(|e| e.to_string()), Some("boom".to_string()));
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let mut board = OrderBoard::new();
        let old = board.begin_fetch();
        let new = board.begin_fetch();

        assert!(board.apply_fetch(new, Ok(vec![order("NEW", OrderState::Pending)])));
        assert!(!board.apply_fetch(old, Ok(vec![order("OLD", OrderState::Pending)])));
        assert_eq!(board.orders()[0].id, "NEW");
    }

    #[test]
    fn test_begin_transition_locks_row() {
        let mut board = loaded(vec![order("A1", OrderState::Pending)]);
        let ticket = board
            .begin_transition("A1", OrderState::Shipping)
            .unwrap();
        assert!(board.is_in_flight("A1"));

        let second = board.begin_transition("A1", OrderState::Shipping);
        assert!(matches!(second, Err(ApiError::Validation(_))));

        let refetch = board.finish_transition(&ticket, &Ok(())).unwrap();
        assert!(board.is_in_flight("A1"));
        assert!(board.is_loading());

        board.apply_fetch(refetch, Ok(vec![order("A1", OrderState::Shipping)]));
        assert!(!board.is_in_flight("A1"));
    }

    #[test]
    fn test_row_stays_locked_until_refetch_lands() {
        let mut board = loaded(vec![order("A1", OrderState::Pending)]);
        let ticket = board
            .begin_transition("A1", OrderState::Shipping)
            .unwrap();
        let refetch = board.finish_transition(&ticket, &Ok(())).unwrap();

        // cached row is still Pending, but the action must stay disabled
        assert_eq!(board.find("A1").map(|o| o.state), Some(OrderState::Pending));
        assert!(board.begin_transition("A1", OrderState::Shipping).is_err());

        board.apply_fetch(
            refetch,
            Err(ApiError::Transport("HTTP error! status: 502".to_string())),
        );
        assert!(!board.is_in_flight("A1"));
    }

    #[test]
    fn test_success_does_not_touch_cached_order() {
        let mut board = loaded(vec![order("A1", OrderState::Pending)]);
        let before = board.orders().to_vec();
        let ticket = board
            .begin_transition("A1", OrderState::Shipping)
            .unwrap();
        board.finish_transition(&ticket, &Ok(()));
        assert_eq!(board.orders(), before.as_slice());
    }

    #[test]
    fn test_illegal_transition_is_rejected() {
        let mut board = loaded(vec![
            order("A1", OrderState::Pending),
            order("D4", OrderState::Delivered),
        ]);
        assert!(board.begin_transition("A1", OrderState::Delivered).is_err());
        assert!(board.begin_transition("D4", OrderState::Shipping).is_err());
        assert!(board.begin_transition("A1", OrderState::Cancelled).is_err());
        assert!(board.begin_transition("missing", OrderState::Shipping).is_err());
        assert!(!board.is_in_flight("A1"));
        assert!(board.transition_error().is_some());
    }

    #[test]
    fn test_failed_transition_keeps_message() {
        let mut board = loaded(vec![order("A1", OrderState::Pending)]);
        let ticket = board
            .begin_transition("A1", OrderState::Shipping)
            .unwrap();
        let refetch = board.finish_transition(
            &ticket,
            &Err(ApiError::Domain {
                status: 400,
                message: "Order already paid".to_string(),
            }),
        );
        assert!(refetch.is_none());
        assert!(!board.is_in_flight("A1"));
        assert_eq!(board.find("A1").map(|o| o.state), Some(OrderState::Pending));
        assert_eq!(
            board.transition_error().map(|e| e.to_string()),
            Some("Order already paid".to_string())
        );
    }

    #[test]
    fn test_confirmation_is_consumed_once() {
        let mut board = loaded(vec![order("B2", OrderState::Shipping)]);
        board
            .open_confirmation("B2", OrderState::Delivered)
            .unwrap();
        assert!(board.confirmation().is_some());

        assert!(board.take_confirmation("B2", OrderState::Delivered).is_some());
        assert!(board.take_confirmation("B2", OrderState::Delivered).is_none());
    }

    #[test]
    fn test_confirmation_must_match_order() {
        let mut board = loaded(vec![
            order("B2", OrderState::Shipping),
            order("C3", OrderState::Shipping),
        ]);
        board
            .open_confirmation("B2", OrderState::Delivered)
            .unwrap();
        assert!(board.take_confirmation("C3", OrderState::Delivered).is_none());
        assert!(board.confirmation().is_some());
        assert!(board.decline_confirmation().is_some());
        assert!(board.confirmation().is_none());
    }

    #[test]
    fn test_unconfirmed_transition_cannot_open_gate() {
        let mut board = loaded(vec![order("A1", OrderState::Pending)]);
        assert!(board
            .open_confirmation("A1", OrderState::Shipping)
            .is_err());
        assert!(board.confirmation().is_none());
    }
}
