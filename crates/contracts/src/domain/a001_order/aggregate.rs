use super::state::OrderState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to another record as the Order Service sends it: either a
/// populated sub-document or just its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Embedded(EmbeddedRef),
    Id(String),
}

/// Populated form of [`EntityRef`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl EntityRef {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Embedded(e) => &e.id,
            EntityRef::Id(id) => id,
        }
    }

    /// Name when populated, otherwise the raw id.
    pub fn display_name(&self) -> &str {
        match self {
            EntityRef::Embedded(EmbeddedRef {
                name: Some(name), ..
            }) if !name.is_empty() => name,
            other => other.id(),
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            EntityRef::Embedded(e) => e.image.as_deref(),
            EntityRef::Id(_) => None,
        }
    }
}

/// Строка заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "productId", default)]
    pub product: Option<EntityRef>,
    #[serde(rename = "sizeId", default)]
    pub size: Option<EntityRef>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(rename = "price", default)]
    pub unit_price: f64,
}

impl OrderItem {
    pub fn product_name(&self) -> &str {
        self.product.as_ref().map(|p| p.display_name()).unwrap_or("—")
    }

    pub fn line_amount(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Order as returned by `GET /get-list-orders`.
///
/// Everything except `state` is read-only for the dashboard; `state` changes
/// only through `PUT /update-order/{id}` followed by a fresh list fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub state: OrderState,
    #[serde(rename = "products", default)]
    pub items: Vec<OrderItem>,
    /// Computed by the service
    #[serde(default)]
    pub total_amount: f64,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Body of `PUT /update-order/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    pub state: OrderState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_service_payload() {
        let json = r#"{
            "_id": "A1",
            "state": 0,
            "total_amount": 150000,
            "createdAt": "2024-05-01T10:15:00.000Z",
            "products": [
                {"productId": {"_id": "p1", "name": "Latte", "image": "latte.png"}, "sizeId": "s1", "quantity": 2, "price": 50000},
                {"productId": "p2", "quantity": 1, "price": 50000}
            ]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.id, "A1");
        assert_eq!(order.state, OrderState::Pending);
        assert_eq!(order.total_amount, 150000.0);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product_name(), "Latte");
        assert_eq!(order.items[0].size.as_ref().map(|s| s.id()), Some("s1"));
        assert_eq!(order.items[1].product_name(), "p2");
        assert_eq!(order.total_quantity(), 3);
        assert!(order.created_at.is_some());
    }

    #[test]
    fn test_null_product_name_falls_back_to_id() {
        let json = r#"{
            "_id": "C3",
            "state": "0",
            "products": [{"productId": {"_id": "p1", "name": null, "image": null}, "quantity": 1, "price": 10}]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.state, OrderState::Pending);
        assert_eq!(order.items[0].product_name(), "p1");
        assert_eq!(order.items[0].product.as_ref().and_then(|p| p.image()), None);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let order: Order = serde_json::from_str(r#"{"_id": "B2", "state": 1}"#).unwrap();
        assert!(order.items.is_empty());
        assert_eq!(order.total_amount, 0.0);
        assert!(order.created_at.is_none());
    }

    #[test]
    fn test_update_request_body() {
        let body = serde_json::to_string(&UpdateOrderRequest {
            state: OrderState::Shipping,
        })
        .unwrap();
        assert_eq!(body, r#"{"state":1}"#);
    }

    #[test]
    fn test_line_amount() {
        let item = OrderItem {
            product: None,
            size: None,
            quantity: 3,
            unit_price: 25000.0,
        };
        assert_eq!(item.line_amount(), 75000.0);
        assert_eq!(item.product_name(), "—");
    }
}
