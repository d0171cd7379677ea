pub mod api;
pub mod board;
pub mod controller;
pub mod ui;

pub use api::{HttpOrderApi, OrderApi};
pub use board::OrderBoard;
pub use controller::{BoardStore, FlowOutcome, OrderLifecycleController};
