//! HTTP collaborator for the order screens

use crate::shared::api_utils::{api_base, encode_segment, read_body};
use contracts::domain::a001_order::{Order, OrderDetail, OrderState, UpdateOrderRequest};
use contracts::shared::{decode_ack, decode_data, decode_list, ApiError};
use gloo_net::http::Request;

/// Order Service operations used by the dashboard.
///
/// Implemented over HTTP by [`HttpOrderApi`]; tests supply in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait OrderApi {
    /// `GET /get-list-orders`
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// `PUT /update-order/{id}` with `{ "state": <code> }`
    async fn update_state(&self, order_id: &str, state: OrderState) -> Result<(), ApiError>;

    /// `GET /orders/{id}`
    async fn fetch_detail(&self, order_id: &str) -> Result<OrderDetail, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpOrderApi {
    base: String,
}

impl HttpOrderApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client pointed at the configured API base
    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl OrderApi for HttpOrderApi {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.url("/get-list-orders");
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(ApiError::transport)?;
        let (status, text) = read_body(response).await?;
        let list = decode_list::<Order>(status, &text)?;
        if list.skipped > 0 {
            log::warn!("skipped {} unreadable order records", list.skipped);
        }
        Ok(list.items)
    }

    async fn update_state(&self, order_id: &str, state: OrderState) -> Result<(), ApiError> {
        let url = self.url(&format!("/update-order/{}", encode_segment(order_id)));
        log::debug!("PUT {} state={}", url, state.code());
        let response = Request::put(&url)
            .json(&UpdateOrderRequest { state })
            .map_err(ApiError::transport)?
            .send()
            .await
            .map_err(ApiError::transport)?;
        let (status, text) = read_body(response).await?;
        decode_ack(status, &text)
    }

    async fn fetch_detail(&self, order_id: &str) -> Result<OrderDetail, ApiError> {
        let url = self.url(&format!("/orders/{}", encode_segment(order_id)));
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(ApiError::transport)?;
        let (status, text) = read_body(response).await?;
        decode_data(status, &text)
    }
}
