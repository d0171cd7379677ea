use super::state::OrderState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order drill-down as returned by `GET /orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "clientId", default)]
    pub client_id: String,
    pub state: OrderState,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub order_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub products: Vec<OrderDetailLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailLine {
    #[serde(rename = "productId", default)]
    pub product_id: String,
    #[serde(rename = "productName", default)]
    pub product_name: String,
    #[serde(rename = "sizeId", default)]
    pub size_id: String,
    #[serde(rename = "sizeName", default)]
    pub size_name: String,
    #[serde(default)]
    pub quantity: u32,
}
