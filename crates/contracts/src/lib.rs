//! Types shared between the admin dashboard and anything else that speaks
//! the Order Service wire format.

pub mod dashboards;
pub mod domain;
pub mod shared;
