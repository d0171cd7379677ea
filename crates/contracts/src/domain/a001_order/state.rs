use crate::shared::error::ApiError;
use serde::{Deserialize, Deserializer, Serialize};

/// Статус заказа.
///
/// Wire format is the integer code (`"state": 1`); some endpoints send it as
/// a numeric string (`"state": "1"`), which is accepted too. Codes outside
/// the known table are kept as `Unknown` and match no list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i32")]
pub enum OrderState {
    Pending,
    Shipping,
    Delivered,
    Cancelled,
    Unknown(i32),
}

/// An admin-initiated move between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: OrderState,
    pub to: OrderState,
}

/// Every transition the dashboard is allowed to request.
/// `Cancelled` never appears as a target: only the storefront cancels.
const TRANSITIONS: [Transition; 2] = [
    Transition {
        from: OrderState::Pending,
        to: OrderState::Shipping,
    },
    Transition {
        from: OrderState::Shipping,
        to: OrderState::Delivered,
    },
];

impl OrderState {
    /// States offered as list filters, in display order.
    pub const FILTERABLE: [OrderState; 4] = [
        OrderState::Pending,
        OrderState::Shipping,
        OrderState::Delivered,
        OrderState::Cancelled,
    ];

    pub fn code(self) -> i32 {
        match self {
            OrderState::Pending => 0,
            OrderState::Shipping => 1,
            OrderState::Delivered => 2,
            OrderState::Cancelled => 3,
            OrderState::Unknown(code) => code,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderState::Pending => "Pending",
            OrderState::Shipping => "Shipping",
            OrderState::Delivered => "Delivered",
            OrderState::Cancelled => "Cancelled",
            OrderState::Unknown(_) => "Unknown",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderState::Delivered | OrderState::Cancelled)
    }

    /// The single transition the dashboard may request from this state.
    pub fn transition(self) -> Option<Transition> {
        TRANSITIONS.iter().copied().find(|t| t.from == self)
    }

    pub fn can_transition_to(self, target: OrderState) -> bool {
        self.transition().is_some_and(|t| t.to == target)
    }

    /// Resolve `self -> target` against the transition table.
    pub fn check_transition(self, target: OrderState) -> Result<Transition, ApiError> {
        match self.transition() {
            Some(t) if t.to == target => Ok(t),
            _ => Err(ApiError::Validation(format!(
                "Transition {} -> {} is not allowed",
                self.label(),
                target.label()
            ))),
        }
    }
}

impl From<i32> for OrderState {
    fn from(code: i32) -> Self {
        match code {
            0 => OrderState::Pending,
            1 => OrderState::Shipping,
            2 => OrderState::Delivered,
            3 => OrderState::Cancelled,
            other => OrderState::Unknown(other),
        }
    }
}

impl<'de> Deserialize<'de> for OrderState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(code) => Ok(OrderState::from(code)),
            Raw::Text(text) => text
                .trim()
                .parse::<i32>()
                .map(OrderState::from)
                .map_err(|_| serde::de::Error::custom(format!("invalid order state: {}", text))),
        }
    }
}

impl From<OrderState> for i32 {
    fn from(state: OrderState) -> Self {
        state.code()
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderState::Unknown(code) => write!(f, "Unknown ({})", code),
            known => f.write_str(known.label()),
        }
    }
}

impl Transition {
    /// Shipping -> Delivered must be confirmed by the admin before it is sent.
    pub fn requires_confirmation(&self) -> bool {
        self.from == OrderState::Shipping && self.to == OrderState::Delivered
    }

    /// Button caption for the row action.
    pub fn action_label(&self) -> &'static str {
        match self.to {
            OrderState::Shipping => "Ship",
            OrderState::Delivered => "Mark delivered",
            _ => "Apply",
        }
    }
}
