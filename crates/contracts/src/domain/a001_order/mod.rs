pub mod aggregate;
pub mod detail;
pub mod state;

pub use aggregate::{EmbeddedRef, EntityRef, Order, OrderItem, UpdateOrderRequest};
pub use detail::{OrderDetail, OrderDetailLine};
pub use state::{OrderState, Transition};
